//! Lint trait for spec validation.

use edl_ir::{Diagnostic, Spec};
use edl_spec::SpecDocument;

/// A lint that checks one cross-entity invariant over the whole spec.
///
/// Lints never stop early: every violation they can see is reported, and a
/// failure in one entity does not hide its siblings.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// What this lint enforces.
    fn description(&self) -> &'static str;

    /// Check the spec and append any diagnostics. The document is only
    /// consulted for file/location stamping.
    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>);
}

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}
