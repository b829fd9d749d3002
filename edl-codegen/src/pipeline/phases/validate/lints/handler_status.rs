//! Lint for handler-generation prerequisites.

use edl_ir::{Diagnostic, Spec};
use edl_spec::SpecDocument;

use super::super::Lint;

/// Lint that requires every category to declare an HTTP status when
/// handler generation is enabled. Not part of the default registry; the
/// compiler appends it only for handler builds.
pub struct HandlerStatusLint;

impl Lint for HandlerStatusLint {
    fn name(&self) -> &'static str {
        "handler-status"
    }

    fn description(&self) -> &'static str {
        "Every category declares an httpStatus when handler generation is on"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        for category in spec.categories.values() {
            if category.http_status.is_none() {
                diagnostics.push(document.error_at(
                    "httpStatus is required when handler generation is enabled",
                    &format!("categories.{}.httpStatus", category.name),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_is_reported() {
        let document = SpecDocument::from_str(
            "\
package: com.example
baseException: App
source: svc
categories:
  WithStatus:
    codePrefix: WS
    httpStatus: 400
  NoStatus:
    codePrefix: NS
errors: {}
",
            "edl.yaml",
        )
        .expect("valid yaml");
        let spec = edl_spec::parse(&document).spec.expect("spec should parse");

        let mut diagnostics = Vec::new();
        HandlerStatusLint.check(&spec, &document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "categories.NoStatus.httpStatus");
    }
}
