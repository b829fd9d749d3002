//! YAML loading and spec parsing for the EDL exception compiler.
//!
//! Two layers live here:
//!
//! - the loader, which turns YAML text into a generic `{map, list, scalar}`
//!   [`edl_ir::Value`] tree plus a dotted-path → source-location index;
//! - the parser, which turns that tree into the typed [`edl_ir::Spec`],
//!   accumulating diagnostics instead of failing fast.
//!
//! Only the two fatal cases (unreadable file, malformed YAML) surface as
//! [`Error`]; everything a spec author can fix becomes a diagnostic.

mod error;
mod loader;
mod location;
mod parser;

pub use error::{Error, Result};
pub use loader::SpecDocument;
pub use location::LocationIndex;
pub use parser::{ParseOutcome, parse};
