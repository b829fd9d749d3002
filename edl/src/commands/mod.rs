mod check;
mod completions;
mod explain;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use explain::ExplainCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on loader errors with pretty formatting.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for edl_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Print diagnostics as compiler-style lines and report what was seen.
pub(crate) fn print_diagnostics(diagnostics: &[edl_ir::Diagnostic]) -> (bool, bool) {
    let mut has_errors = false;
    let mut has_warnings = false;
    for diag in diagnostics {
        match diag.severity {
            edl_ir::Severity::Error => {
                has_errors = true;
                eprintln!("error: {}", diag.message);
            }
            edl_ir::Severity::Warning => {
                has_warnings = true;
                eprintln!("warning: {}", diag.message);
            }
        }
        if !diag.path.is_empty() {
            match &diag.location {
                Some(loc) => eprintln!("  --> {} (line {}, col {})", diag.path, loc.line, loc.column),
                None => eprintln!("  --> {}", diag.path),
            }
        }
    }
    (has_errors, has_warnings)
}

#[derive(Parser)]
#[command(name = "edl")]
#[command(version)]
#[command(about = "Compile error-taxonomy specs into Java exception hierarchies")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a spec without generating code
    Check(CheckCommand),

    /// Generate the exception hierarchy from a spec
    Generate(GenerateCommand),

    /// Show the pipeline, the lints, and resolved error details
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
