//! Lint for template placeholder closure.

use std::collections::HashSet;

use edl_ir::{Diagnostic, RENDERABLE_FIELDS, Spec};
use edl_spec::SpecDocument;

use super::super::Lint;
use crate::render::placeholders;

/// Lint that checks every `{placeholder}` in description and detail
/// templates against the set of names renderable for that error: the
/// owning category's params, the error's required and optional params, and
/// the renderable derived fields.
pub struct PlaceholderLint;

impl Lint for PlaceholderLint {
    fn name(&self) -> &'static str {
        "placeholders"
    }

    fn description(&self) -> &'static str {
        "Template placeholders resolve to a declared or derived field"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for error in spec.errors.values() {
            let mut allowed: HashSet<&str> = RENDERABLE_FIELDS.into_iter().collect();
            if let Some(category) = spec.categories.get(&error.category) {
                allowed.extend(category.params.keys().map(String::as_str));
            }
            allowed.extend(error.required.keys().map(String::as_str));
            allowed.extend(error.optional.keys().map(String::as_str));

            let detail_segment = match error.detail_key {
                edl_ir::DetailKey::Detail => "fixed.detail",
                edl_ir::DetailKey::Details => "fixed.details",
            };
            let templates = [
                ("fixed.description", &error.description),
                (detail_segment, &error.detail),
            ];
            for (segment, template) in templates {
                for placeholder in placeholders(template) {
                    if !allowed.contains(placeholder.as_str()) {
                        diagnostics.push(document.error_at(
                            format!("Unresolved template placeholder '{{{placeholder}}}'"),
                            &format!("errors.{}.{segment}", error.name),
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(yaml: &str) -> Vec<Diagnostic> {
        let document = SpecDocument::from_str(yaml, "edl.yaml").expect("valid yaml");
        let outcome = edl_spec::parse(&document);
        let spec = outcome.spec.expect("spec should parse");
        let mut diagnostics = Vec::new();
        PlaceholderLint.check(&spec, &document, &mut diagnostics);
        diagnostics
    }

    const HEADER: &str = "\
package: com.example
baseException: App
source: svc
categories:
  Billing:
    codePrefix: BIL
    params:
      tenant: String
";

    #[test]
    fn test_declared_and_derived_placeholders_resolve() {
        let yaml = format!(
            "{HEADER}errors:
  cardDeclined:
    category: Billing
    fixed:
      code: 1
      description: \"Card {{pan}} declined for {{tenant}}\"
      detail: \"Code {{code}} from {{source}}, recoverable {{recoverable}}, region {{region}}\"
    required:
      pan: String
    optional:
      - region
"
        );
        assert!(check(&yaml).is_empty());
    }

    #[test]
    fn test_unresolved_placeholder_in_description() {
        let yaml = format!(
            "{HEADER}errors:
  cardDeclined:
    category: Billing
    fixed:
      code: 1
      description: \"Card {{pan}} declined\"
      detail: \"No more detail\"
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'{pan}'"));
        assert_eq!(diagnostics[0].path, "errors.cardDeclined.fixed.description");
    }

    #[test]
    fn test_diagnostic_follows_detail_spelling() {
        let yaml = format!(
            "{HEADER}errors:
  cardDeclined:
    category: Billing
    fixed:
      code: 1
      description: \"Card declined\"
      details: \"Mystery {{thing}}\"
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "errors.cardDeclined.fixed.details");
        assert!(diagnostics[0].location.is_some());
    }

    #[test]
    fn test_description_and_detail_are_not_placeholders() {
        // description/detail/details are derived but not renderable inside
        // templates; referencing them is an error
        let yaml = format!(
            "{HEADER}errors:
  cardDeclined:
    category: Billing
    fixed:
      code: 1
      description: \"See {{detail}}\"
      detail: \"Plain\"
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
    }
}
