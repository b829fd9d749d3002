//! Lint for empty message templates.

use edl_ir::{DetailKey, Diagnostic, Spec};
use edl_spec::SpecDocument;

use super::super::Lint;

/// Lint that warns when a description or detail template is blank. A blank
/// template renders to nothing useful, which is almost always an authoring
/// oversight, but it does not block generation.
pub struct EmptyTemplateLint;

impl Lint for EmptyTemplateLint {
    fn name(&self) -> &'static str {
        "empty-template"
    }

    fn description(&self) -> &'static str {
        "Description and detail templates should not be blank"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for error in spec.errors.values() {
            if error.description.trim().is_empty() {
                diagnostics.push(document.warning_at(
                    format!("Error '{}' has an empty description template", error.name),
                    &format!("errors.{}.fixed.description", error.name),
                ));
            }
            if error.detail.trim().is_empty() {
                let segment = match error.detail_key {
                    DetailKey::Detail => "fixed.detail",
                    DetailKey::Details => "fixed.details",
                };
                diagnostics.push(document.warning_at(
                    format!("Error '{}' has an empty detail template", error.name),
                    &format!("errors.{}.{segment}", error.name),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use edl_ir::Severity;

    use super::*;

    fn check(yaml: &str) -> Vec<Diagnostic> {
        let document = SpecDocument::from_str(yaml, "edl.yaml").expect("valid yaml");
        let outcome = edl_spec::parse(&document);
        let spec = outcome.spec.expect("spec should parse");
        let mut diagnostics = Vec::new();
        EmptyTemplateLint.check(&spec, &document, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_blank_description_warns() {
        let diagnostics = check(
            "\
package: com.example
baseException: App
source: svc
categories:
  Input:
    codePrefix: IN
errors:
  silent:
    category: Input
    fixed:
      code: 1
      description: \" \"
      detail: \"Something\"
",
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("empty description"));
    }

    #[test]
    fn test_populated_templates_are_clean() {
        let diagnostics = check(
            "\
package: com.example
baseException: App
source: svc
categories:
  Input:
    codePrefix: IN
errors:
  loud:
    category: Input
    fixed:
      code: 1
      description: \"Loud\"
      detail: \"Very loud\"
",
        );
        assert!(diagnostics.is_empty());
    }
}
