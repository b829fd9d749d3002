//! Validate phase - runs lints over the parsed spec.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::{Lint, LintInfo};
pub use lints::{
    CategoryGraphLint, EmptyTemplateLint, ErrorHygieneLint, HandlerStatusLint, IdentifierCaseLint,
    PlaceholderLint, ResponseFieldLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the spec using a configurable lint registry.
///
/// Lints only report; deciding what blocks generation is the caller's
/// business. The phase is a no-op when the parse phase produced no spec.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(IdentifierCaseLint),
                Box::new(CategoryGraphLint),
                Box::new(ErrorHygieneLint),
                Box::new(PlaceholderLint),
                Box::new(ResponseFieldLint),
                Box::new(EmptyTemplateLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint to this phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Information about the lints that will run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints
            .iter()
            .map(|l| LintInfo {
                name: l.name(),
                description: l.description(),
            })
            .collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check cross-entity invariants and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(spec) = ctx.spec.as_ref() else {
            return Ok(());
        };
        for lint in &self.lints {
            lint.check(spec, &ctx.document, &mut ctx.diagnostics);
        }
        Ok(())
    }
}
