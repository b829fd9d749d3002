//! Parse phase - document tree → typed spec.

use eyre::Result;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that runs the spec parser over the loaded document.
///
/// Leaves `ctx.spec` unset when the document cannot produce a spec; the
/// runner stops the pipeline there.
pub struct ParsePhase;

impl Phase for ParsePhase {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn description(&self) -> &'static str {
        "Read the document tree into the typed spec"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let outcome = edl_spec::parse(&ctx.document);
        ctx.diagnostics.extend(outcome.diagnostics);
        ctx.spec = outcome.spec;
        Ok(())
    }
}
