//! Pipeline orchestrator.

use edl_spec::SpecDocument;
use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{ParsePhase, ValidatePhase},
};

/// The compilation pipeline.
///
/// Runs the built-in phases (parse, validate) followed by any caller
/// phases. The pipeline stops early when the parse phase cannot produce a
/// spec; everything else runs to completion and reports through the
/// context's diagnostics list, which the caller gets back in all cases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(document)?;
/// if ctx.can_generate() {
///     // hand ctx.spec to a generator
/// }
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in phases only.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline over a loaded document.
    ///
    /// # Errors
    ///
    /// Returns an error only when a phase fails internally; spec problems
    /// are diagnostics in the returned context.
    pub fn run(&self, document: SpecDocument) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document);

        let builtin: Vec<Box<dyn Phase>> =
            vec![Box::new(ParsePhase), Box::new(ValidatePhase::new())];

        for phase in builtin.iter().chain(self.phases.iter()) {
            phase.run(&mut ctx)?;
            if ctx.spec.is_none() {
                break;
            }
        }

        Ok(ctx)
    }

    /// Information about the phases this pipeline will run.
    pub fn phase_info(&self) -> Vec<super::PhaseInfo> {
        let builtin: Vec<Box<dyn Phase>> =
            vec![Box::new(ParsePhase), Box::new(ValidatePhase::new())];
        builtin
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.info())
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
