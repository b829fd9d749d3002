//! Lint for error uniqueness and param hygiene.

use std::collections::{HashMap, HashSet};

use edl_ir::{Diagnostic, Spec, is_derived_field};
use edl_spec::SpecDocument;

use super::super::Lint;

/// Lint that checks category references, per-category code uniqueness, and
/// param-name hygiene (reserved names, duplicates against the owning
/// category and each other).
pub struct ErrorHygieneLint;

impl Lint for ErrorHygieneLint {
    fn name(&self) -> &'static str {
        "error-hygiene"
    }

    fn description(&self) -> &'static str {
        "Error codes are unique per category and param names are sound"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut codes_by_category: HashMap<&str, HashSet<&str>> = HashMap::new();

        for error in spec.errors.values() {
            let Some(category) = spec.categories.get(&error.category) else {
                diagnostics.push(document.error_at(
                    format!("Unknown category '{}'", error.category),
                    &format!("errors.{}.category", error.name),
                ));
                continue;
            };

            let codes = codes_by_category.entry(category.name.as_str()).or_default();
            if !codes.insert(error.code.as_str()) {
                diagnostics.push(document.error_at(
                    format!(
                        "Duplicate numeric code '{}' in category {}",
                        error.code, category.name
                    ),
                    &format!("errors.{}.fixed.code", error.name),
                ));
            }

            let mut seen: HashSet<&str> =
                category.params.keys().map(String::as_str).collect();
            for (param, section) in error
                .required
                .keys()
                .map(|p| (p, "required"))
                .chain(error.optional.keys().map(|p| (p, "optional")))
            {
                let path = format!("errors.{}.{section}.{param}", error.name);
                if is_derived_field(param) {
                    diagnostics.push(document.error_at(
                        format!("'{param}' is a derived field name and cannot be a param"),
                        &path,
                    ));
                    continue;
                }
                if !seen.insert(param) {
                    let message = if category.params.contains_key(param) {
                        format!(
                            "Param '{param}' is already declared by category {}",
                            category.name
                        )
                    } else {
                        format!("Param '{param}' is declared more than once")
                    };
                    diagnostics.push(document.error_at(message, &path));
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
        ErrorHygieneLint.check(&spec, &document, &mut diagnostics);
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
  Auth:
    codePrefix: AUT
";

    #[test]
    fn test_unknown_category() {
        let yaml = format!(
            "{HEADER}errors:
  lost:
    category: Missing
    fixed:
      code: 1
      description: \"Lost\"
      detail: \"Lost badly\"
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "errors.lost.category");
    }

    #[test]
    fn test_same_code_across_categories_is_fine() {
        let yaml = format!(
            "{HEADER}errors:
  one:
    category: Billing
    fixed:
      code: 1
      description: \"One\"
      detail: \"One detail\"
  two:
    category: Auth
    fixed:
      code: 1
      description: \"Two\"
      detail: \"Two detail\"
"
        );
        assert!(check(&yaml).is_empty());
    }

    #[test]
    fn test_duplicate_code_within_category() {
        let yaml = format!(
            "{HEADER}errors:
  one:
    category: Auth
    fixed:
      code: 1
      description: \"One\"
      detail: \"One detail\"
  two:
    category: Auth
    fixed:
      code: \"0001\"
      description: \"Two\"
      detail: \"Two detail\"
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Duplicate numeric code '0001'"));
        assert_eq!(diagnostics[0].path, "errors.two.fixed.code");
    }

    #[test]
    fn test_reserved_param_name() {
        let yaml = format!(
            "{HEADER}errors:
  bad:
    category: Auth
    fixed:
      code: 1
      description: \"Bad\"
      detail: \"Bad detail\"
    required:
      code: String
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "errors.bad.required.code");
    }

    #[test]
    fn test_param_clash_with_category() {
        let yaml = format!(
            "{HEADER}errors:
  bad:
    category: Billing
    fixed:
      code: 1
      description: \"Bad\"
      detail: \"Bad detail\"
    required:
      tenant: String
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("already declared by category Billing"));
    }

    #[test]
    fn test_param_clash_between_required_and_optional() {
        let yaml = format!(
            "{HEADER}errors:
  bad:
    category: Auth
    fixed:
      code: 1
      description: \"Bad\"
      detail: \"Bad detail\"
    required:
      token: String
    optional:
      - token
"
        );
        let diagnostics = check(&yaml);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("more than once"));
        assert_eq!(diagnostics[0].path, "errors.bad.optional.token");
    }
}
