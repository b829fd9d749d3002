//! Lint for identifier casing.

use edl_ir::{Diagnostic, Spec};
use edl_spec::SpecDocument;

use super::super::Lint;

/// Lint that enforces PascalCase categories and camelCase errors.
pub struct IdentifierCaseLint;

impl Lint for IdentifierCaseLint {
    fn name(&self) -> &'static str {
        "identifier-case"
    }

    fn description(&self) -> &'static str {
        "Categories must be PascalCase, errors camelCase"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for name in spec.categories.keys() {
            if !is_pascal_case(name) {
                diagnostics.push(document.error_at(
                    format!("Category identifier '{name}' must be PascalCase"),
                    &format!("categories.{name}"),
                ));
            }
        }
        for name in spec.errors.keys() {
            if !is_camel_case(name) {
                diagnostics.push(document.error_at(
                    format!("Error identifier '{name}' must be camelCase"),
                    &format!("errors.{name}"),
                ));
            }
        }
    }
}

/// `[A-Z][A-Za-z0-9]*`
fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `[a-z][A-Za-z0-9]*`
fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
