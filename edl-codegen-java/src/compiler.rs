//! The compile orchestrator: load → parse → validate → generate → write.

use std::path::{Path, PathBuf};

use edl_codegen::pipeline::{
    Pipeline,
    phases::{ValidatePhase, lints::HandlerStatusLint},
};
use edl_ir::Diagnostic;
use edl_spec::SpecDocument;
use eyre::Result;

use crate::generator::Generator;

/// Options for one compile invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Emit the companion documentation file.
    pub generate_docs: bool,
    /// Emit the Spring handler pair (adds the handler-status lint).
    pub generate_handler: bool,
}

/// What one compile produced: the complete diagnostics list regardless of
/// how far the pipeline got, and the emitted paths (empty when it stopped
/// before generation).
#[derive(Debug)]
pub struct CompileOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub generated_files: Vec<PathBuf>,
    pub written: usize,
    pub unchanged: usize,
}

impl CompileOutcome {
    fn aborted(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            generated_files: Vec::new(),
            written: 0,
            unchanged: 0,
        }
    }

    /// True when no error diagnostic was recorded.
    pub fn succeeded(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Sequences the full compile. Unreadable input is a hard error; a spec
/// the author can fix only ever shows up as diagnostics.
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compile `spec_path` into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error for unreadable input or an unwritable output
    /// directory. Everything else is reported through the outcome's
    /// diagnostics.
    pub fn compile(&self, spec_path: &Path, output_dir: &Path) -> Result<CompileOutcome> {
        let document = match SpecDocument::load(spec_path) {
            Ok(document) => document,
            Err(error) => {
                if matches!(error.as_ref(), edl_spec::Error::Io { .. }) {
                    return Err(eyre::Report::new(*error));
                }
                // Malformed YAML: a single diagnostic, nothing generated.
                let diagnostic = Diagnostic::error(format!("Invalid YAML: {}", error.message()))
                    .in_file(spec_path.display().to_string());
                return Ok(CompileOutcome::aborted(vec![diagnostic]));
            }
        };
        self.compile_document(document, output_dir)
    }

    /// Compile an already-loaded document into `output_dir`.
    pub fn compile_document(
        &self,
        document: SpecDocument,
        output_dir: &Path,
    ) -> Result<CompileOutcome> {
        let mut pipeline = Pipeline::new();
        if self.options.generate_handler {
            pipeline = pipeline.phase(ValidatePhase::empty().with_lint(HandlerStatusLint));
        }

        let ctx = pipeline.run(document)?;
        if !ctx.can_generate() {
            return Ok(CompileOutcome::aborted(ctx.diagnostics));
        }
        let Some(spec) = ctx.spec.as_ref() else {
            return Ok(CompileOutcome::aborted(ctx.diagnostics));
        };

        let report = Generator::new(spec)
            .with_handler(self.options.generate_handler)
            .with_docs(self.options.generate_docs)
            .generate(output_dir)?;

        Ok(CompileOutcome {
            diagnostics: ctx.diagnostics,
            generated_files: report.files,
            written: report.written,
            unchanged: report.unchanged,
        })
    }
}
