//! Lint for the response-field rename table.

use std::collections::HashSet;

use edl_ir::{DERIVED_FIELDS, Diagnostic, Spec};
use edl_spec::SpecDocument;

use super::super::Lint;

/// Lint that restricts response-field keys to the six logical fields,
/// requires all six to be present, and keeps the public keys non-blank and
/// pairwise distinct.
pub struct ResponseFieldLint;

impl Lint for ResponseFieldLint {
    fn name(&self) -> &'static str {
        "response-fields"
    }

    fn description(&self) -> &'static str {
        "The response table maps each logical field to one distinct public key"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen_values: HashSet<&str> = HashSet::new();
        for (field, public_key) in &spec.response_fields {
            let path = format!("response.{field}");
            if !DERIVED_FIELDS.contains(&field.as_str()) {
                diagnostics.push(
                    document.error_at(format!("Unknown response field '{field}'"), &path),
                );
                continue;
            }
            if public_key.trim().is_empty() {
                diagnostics.push(document.error_at(
                    format!("Response field '{field}' must not be blank"),
                    &path,
                ));
                continue;
            }
            if !seen_values.insert(public_key) {
                diagnostics.push(document.error_at(
                    format!("Response field value '{public_key}' is duplicated"),
                    &path,
                ));
            }
        }
        for field in DERIVED_FIELDS {
            if !spec.response_fields.contains_key(field) {
                diagnostics.push(document.error_at(
                    format!("Missing response field '{field}'"),
                    &format!("response.{field}"),
                ));
            }
        }
    }
}
