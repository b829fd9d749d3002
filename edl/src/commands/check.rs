use std::path::PathBuf;

use clap::{Args, ValueEnum};
use edl_codegen::pipeline::Pipeline;
use edl_spec::SpecDocument;
use eyre::{Context, Result};

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the spec file (defaults to ./edl.yaml)
    #[arg(short, long, default_value = "edl.yaml")]
    pub spec: PathBuf,

    /// Treat warnings as failures
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Diagnostics output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let document = SpecDocument::load(&self.spec).unwrap_or_exit();

        let ctx = Pipeline::new().run(document).wrap_err("Validation failed")?;

        if self.format == OutputFormat::Json {
            println!(
                "{}",
                serde_json::to_string_pretty(&ctx.diagnostics)
                    .wrap_err("Failed to serialize diagnostics")?
            );
            if ctx.has_errors() {
                std::process::exit(1);
            }
            if ctx.has_warnings() && self.fail_on_warnings {
                std::process::exit(1);
            }
            return Ok(());
        }

        let (has_errors, has_warnings) = print_diagnostics(&ctx.diagnostics);

        if has_errors {
            std::process::exit(1);
        }
        if has_warnings {
            if self.fail_on_warnings {
                eprintln!("failing on warnings (--fail-on-warnings)");
                std::process::exit(1);
            }
            println!();
        }

        println!("✓ {} is valid\n", self.spec.display());

        if let Some(spec) = &ctx.spec {
            println!("  package {}", spec.package);
            println!("  base exception {}Exception", spec.base_exception);
            println!("  source {}\n", spec.source);

            println!(
                "  {} categor{}:",
                spec.categories.len(),
                if spec.categories.len() == 1 { "y" } else { "ies" }
            );
            for category in spec.categories.values() {
                let errors = spec.errors_in(&category.name).count();
                let mut notes = vec![format!("prefix {}", category.code_prefix)];
                if let Some(parent) = &category.parent {
                    notes.push(format!("extends {parent}"));
                }
                if category.is_container {
                    notes.push("container".to_string());
                }
                println!(
                    "    {} ({}, {} error{})",
                    category.name,
                    notes.join(", "),
                    errors,
                    if errors == 1 { "" } else { "s" }
                );
            }
        }

        Ok(())
    }
}
