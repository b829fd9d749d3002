//! Compilation context passed through pipeline phases.

use edl_ir::{Diagnostic, Severity, Spec};
use edl_spec::SpecDocument;

/// Carries the state of one compile through each phase: the loaded
/// document, the spec once the parse phase materializes it, and the single
/// append-only diagnostics list.
#[derive(Debug)]
pub struct CompilationContext {
    /// The loaded spec document (tree + location index).
    pub document: SpecDocument,
    /// The typed spec (populated by the parse phase; stays `None` when the
    /// document could not produce one).
    pub spec: Option<Spec>,
    /// Diagnostics collected across all phases, in phase order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a loaded document.
    pub fn new(document: SpecDocument) -> Self {
        Self {
            document,
            spec: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// All error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// All warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// True when generation may run: a spec materialized and no phase
    /// reported an error.
    pub fn can_generate(&self) -> bool {
        self.spec.is_some() && !self.has_errors()
    }
}
