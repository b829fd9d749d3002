//! Built-in validation lints.

mod category_graph;
mod empty_template;
mod error_hygiene;
mod handler_status;
mod identifier_case;
mod placeholders;
mod response_fields;

pub use category_graph::CategoryGraphLint;
pub use empty_template::EmptyTemplateLint;
pub use error_hygiene::ErrorHygieneLint;
pub use handler_status::HandlerStatusLint;
pub use identifier_case::IdentifierCaseLint;
pub use placeholders::PlaceholderLint;
pub use response_fields::ResponseFieldLint;
