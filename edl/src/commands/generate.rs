use std::path::PathBuf;

use clap::Args;
use edl_codegen_java::{CompileOptions, Compiler, Generator};
use edl_spec::SpecDocument;
use eyre::{Context, Result};

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the spec file (defaults to ./edl.yaml)
    #[arg(short, long, default_value = "edl.yaml")]
    pub spec: PathBuf,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "generated")]
    pub out: PathBuf,

    /// Also write the companion documentation file
    #[arg(long)]
    pub docs: bool,

    /// Also generate the Spring handler pair
    #[arg(long)]
    pub handler: bool,

    /// Treat warnings as failures
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Preview the generated paths without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        if self.dry_run {
            return self.run_preview();
        }

        let options = CompileOptions {
            generate_docs: self.docs,
            generate_handler: self.handler,
        };
        let outcome = Compiler::new(options)
            .compile(&self.spec, &self.out)
            .wrap_err("Failed to compile spec")?;

        let (has_errors, has_warnings) = print_diagnostics(&outcome.diagnostics);
        if has_errors {
            let errors = outcome
                .diagnostics
                .iter()
                .filter(|d| d.severity.is_error())
                .count();
            eprintln!("compilation failed with {errors} error(s)");
            std::process::exit(1);
        }
        if has_warnings && self.fail_on_warnings {
            eprintln!("failing on warnings (--fail-on-warnings)");
            std::process::exit(1);
        }

        println!(
            "Generated {} file{} into {} ({} written, {} unchanged)",
            outcome.generated_files.len(),
            if outcome.generated_files.len() == 1 { "" } else { "s" },
            self.out.display(),
            outcome.written,
            outcome.unchanged
        );
        Ok(())
    }

    fn run_preview(&self) -> Result<()> {
        let document = SpecDocument::load(&self.spec).unwrap_or_exit();
        let ctx = edl_codegen::pipeline::Pipeline::new()
            .run(document)
            .wrap_err("Validation failed")?;

        let (has_errors, _) = print_diagnostics(&ctx.diagnostics);
        let Some(spec) = ctx.spec.as_ref().filter(|_| !has_errors) else {
            std::process::exit(1);
        };

        let units = Generator::new(spec)
            .with_handler(self.handler)
            .with_docs(self.docs)
            .preview();
        println!("Would generate {} files into {}:", units.len(), self.out.display());
        for unit in &units {
            println!("  {}", unit.path().display());
        }
        Ok(())
    }
}
