//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - accumulates indented output
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for AST nodes that render to fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
