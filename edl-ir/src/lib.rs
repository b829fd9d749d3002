//! Intermediate representation types for the EDL exception compiler.
//!
//! This crate provides the unified type definitions shared across the
//! compilation pipeline. These types are the single source of truth for
//! what a parsed error-taxonomy spec looks like.
//!
//! # Architecture
//!
//! ```text
//! spec.yaml → edl-spec (loading + parsing) → edl-ir (typed spec) → codegen
//! ```
//!
//! The IR is built once by the parser and never mutated afterwards. Every
//! mapping is an [`indexmap::IndexMap`] because declaration order is
//! semantic: it drives constructor parameter order, `coreValues()` field
//! order, and the order of generated compilation units.

mod diagnostic;
mod fields;
mod spec;
mod value;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use fields::{DERIVED_FIELDS, RENDERABLE_FIELDS, is_derived_field};
pub use spec::{CategoryDef, DetailKey, ErrorDef, Spec};
pub use value::Value;
