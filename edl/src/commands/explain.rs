use std::path::PathBuf;

use clap::Args;
use edl_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use edl_codegen::render::{display_value, render_container, render_template};
use edl_ir::{ErrorDef, Spec, Value};
use edl_spec::SpecDocument;
use eyre::{Context, Result};
use indexmap::IndexMap;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to the spec file (defaults to ./edl.yaml)
    #[arg(short, long, default_value = "edl.yaml")]
    pub spec: PathBuf,

    /// Explain a single error (all errors when omitted)
    pub error: Option<String>,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let document = SpecDocument::load(&self.spec).unwrap_or_exit();

        let pipeline = Pipeline::new();

        println!("EDL Compilation Pipeline");
        println!("========================");
        println!();
        println!("Input: {}", self.spec.display());
        println!();

        println!("Phases:");
        for (i, phase) in pipeline.phase_info().iter().enumerate() {
            println!("  {}. {} - {}", i + 1, phase.name, phase.description);
        }
        println!();

        println!("Validation lints:");
        for lint in ValidatePhase::new().lint_info() {
            println!("  - {}: {}", lint.name, lint.description);
        }
        println!();

        let ctx = pipeline.run(document).wrap_err("Pipeline failed")?;
        if !ctx.can_generate() {
            eprintln!(
                "spec has {} error(s); run `edl check` for details",
                ctx.error_count()
            );
            std::process::exit(1);
        }
        let Some(spec) = ctx.spec.as_ref() else {
            std::process::exit(1);
        };

        match &self.error {
            Some(name) => match spec.errors.get(name) {
                Some(error) => explain_error(spec, error),
                None => {
                    eprintln!("unknown error '{name}'");
                    std::process::exit(1);
                }
            },
            None => {
                for error in spec.errors.values() {
                    explain_error(spec, error);
                }
            }
        }

        Ok(())
    }
}

fn explain_error(spec: &Spec, error: &ErrorDef) {
    let chain = spec.ancestry(&error.category);
    let chain_names: Vec<&str> = chain.iter().map(|c| c.name.as_str()).collect();

    // prefixes are applied root-first on the way up the constructor chain
    let full_code: String = chain
        .iter()
        .rev()
        .map(|c| c.code_prefix.as_str())
        .chain([error.code.as_str()])
        .collect();

    println!("{}:", error.name);
    println!("  code {}", full_code);
    println!(
        "  category {} (chain: {})",
        error.category,
        chain_names.join(" -> ")
    );
    println!("  recoverable {}", error.recoverable);

    let values = sample_values(spec, error, &full_code);
    println!("  description \"{}\"", render_template(&error.description, &values));
    println!("  detail \"{}\"", render_template(&error.detail, &values));

    if let Some(template) = &spec.container_response {
        let container = chain.iter().find(|c| c.is_container);
        if container.is_some() {
            let rendered = render_container(template, &[values.clone()]);
            println!("  container response {}", display_value(&rendered));
        }
    }
    println!();
}

/// Field values with placeholder-shaped samples for every declared param.
fn sample_values(spec: &Spec, error: &ErrorDef, full_code: &str) -> IndexMap<String, Value> {
    let mut values = IndexMap::new();
    if let Some(category) = spec.categories.get(&error.category) {
        for param in category.params.keys() {
            values.insert(param.clone(), Value::String(format!("<{param}>")));
        }
    }
    for (param, _) in error.declared_params() {
        values.insert(param.clone(), Value::String(format!("<{param}>")));
    }
    values.insert("source".to_string(), Value::String(spec.source.clone()));
    values.insert("code".to_string(), Value::String(full_code.to_string()));
    values.insert("recoverable".to_string(), Value::Bool(error.recoverable));
    values
}
