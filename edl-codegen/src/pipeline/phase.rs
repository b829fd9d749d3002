//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    /// The phase name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Phases run in order and communicate through the context. Problems a
/// spec author can fix are recorded as diagnostics; `Err` is reserved for
/// internal failures.
///
/// Built-in phases:
/// - `ParsePhase` - tree → typed spec, with per-field diagnostics
/// - `ValidatePhase` - lint registry over the parsed spec
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and reports).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    /// Get information about this phase.
    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
