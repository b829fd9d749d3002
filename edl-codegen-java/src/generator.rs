//! The Java generator: spec → ordered compilation units.

use std::path::{Path, PathBuf};

use edl_codegen::{CompilationUnit, WriteResult};
use edl_ir::Spec;
use eyre::Result;

use crate::files::{
    BaseException, CategoryException, ContainerBase, ContainerException, DocsMd, ErrorException,
    Handler, HandlerBase,
};
use crate::naming::package_path;

/// Generates the exception hierarchy for one spec.
///
/// Expects a spec that validated with zero errors; unknown references are
/// skipped defensively rather than reported here.
pub struct Generator<'a> {
    spec: &'a Spec,
    generate_handler: bool,
    generate_docs: bool,
}

/// What a generation pass did on disk.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Every emitted path, in unit order.
    pub files: Vec<PathBuf>,
    /// How many files were created or replaced.
    pub written: usize,
    /// How many files already held identical bytes.
    pub unchanged: usize,
}

impl<'a> Generator<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self {
            spec,
            generate_handler: false,
            generate_docs: false,
        }
    }

    /// Also emit the Spring handler pair.
    pub fn with_handler(mut self, enabled: bool) -> Self {
        self.generate_handler = enabled;
        self
    }

    /// Also emit the companion documentation file.
    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.generate_docs = enabled;
        self
    }

    /// Render every compilation unit without touching the filesystem.
    ///
    /// Unit order: base exception, categories in declaration order, the
    /// container base (when any category is a container), container units,
    /// leaf errors, then the optional handler pair and docs file.
    pub fn preview(&self) -> Vec<CompilationUnit> {
        let package_dir = package_path(&self.spec.package);
        let unit = |name: &str, content: String| {
            CompilationUnit::new(package_dir.join(format!("{name}.java")), content)
        };

        let mut units = Vec::new();

        let base = BaseException::new(self.spec);
        units.push(unit(&base.class_name(), base.render()));

        for category in self.spec.categories.values() {
            let file = CategoryException::new(self.spec, category);
            units.push(unit(&file.class_name(), file.render()));
        }

        if self.spec.has_containers() {
            let container_base = ContainerBase::new(self.spec);
            units.push(unit(container_base.class_name(), container_base.render()));
            for category in self.spec.categories.values().filter(|c| c.is_container) {
                let file = ContainerException::new(self.spec, category);
                units.push(unit(&file.class_name(), file.render()));
            }
        }

        for error in self.spec.errors.values() {
            let Some(category) = self.spec.categories.get(&error.category) else {
                continue;
            };
            let file = ErrorException::new(self.spec, category, error);
            units.push(unit(&file.class_name(), file.render()));
        }

        if self.generate_handler {
            let handler_base = HandlerBase::new(self.spec);
            units.push(unit(handler_base.class_name(), handler_base.render()));
            let handler = Handler::new(self.spec);
            units.push(unit(&handler.class_name(), handler.render()));
        }

        if self.generate_docs {
            let docs = DocsMd::new(self.spec);
            units.push(CompilationUnit::new(docs.file_name(), docs.render()));
        }

        units
    }

    /// Write every unit under `output_dir`, leaving unchanged files alone.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();
        for unit in self.preview() {
            match unit.write(output_dir)? {
                WriteResult::Written => report.written += 1,
                WriteResult::Unchanged => report.unchanged += 1,
            }
            report.files.push(output_dir.join(unit.path()));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
package: com.example.catalog
baseException: Catalog
source: catalog-service
categories:
  Billing:
    codePrefix: BIL
    httpStatus: 402
  Auth:
    codePrefix: AUT
    httpStatus: 401
    container: true
errors:
  cardDeclined:
    category: Billing
    fixed:
      code: 7
      description: \"Card {pan} declined\"
      detail: \"Issuer said no\"
    required:
      pan: String
  tokenExpired:
    category: Auth
    fixed:
      code: 1
      description: \"Token expired\"
      detail: \"Token for {user} expired\"
    required:
      user: String
";

    fn sample_spec() -> Spec {
        let doc = edl_spec::SpecDocument::from_str(SAMPLE, "edl.yaml").expect("valid yaml");
        edl_spec::parse(&doc).spec.expect("spec should parse")
    }

    #[test]
    fn test_unit_order_and_paths() {
        let spec = sample_spec();
        let units = Generator::new(&spec).preview();

        let paths: Vec<String> = units
            .iter()
            .map(|u| u.path().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            [
                "com/example/catalog/CatalogException.java",
                "com/example/catalog/BillingException.java",
                "com/example/catalog/AuthException.java",
                "com/example/catalog/ContainerExceptionBase.java",
                "com/example/catalog/AuthContainerException.java",
                "com/example/catalog/CardDeclinedException.java",
                "com/example/catalog/TokenExpiredException.java",
            ]
        );
    }

    #[test]
    fn test_handler_and_docs_are_opt_in() {
        let spec = sample_spec();
        let units = Generator::new(&spec)
            .with_handler(true)
            .with_docs(true)
            .preview();
        let paths: Vec<String> = units
            .iter()
            .map(|u| u.path().to_string_lossy().into_owned())
            .collect();
        assert!(paths.contains(&"com/example/catalog/ExceptionHandlerBase.java".to_string()));
        assert!(paths.contains(&"com/example/catalog/CatalogExceptionHandler.java".to_string()));
        assert!(paths.contains(&"edl-docs.md".to_string()));
    }

    #[test]
    fn test_no_container_units_without_container_categories() {
        let yaml = SAMPLE.replace("    container: true\n", "");
        let doc = edl_spec::SpecDocument::from_str(&yaml, "edl.yaml").expect("valid yaml");
        let spec = edl_spec::parse(&doc).spec.expect("spec should parse");
        let units = Generator::new(&spec).preview();
        assert!(
            units
                .iter()
                .all(|u| !u.path().to_string_lossy().contains("Container"))
        );
    }

    #[test]
    fn test_generate_writes_and_is_idempotent() {
        let spec = sample_spec();
        let temp = tempfile::TempDir::new().unwrap();
        let generator = Generator::new(&spec);

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written, 7);
        assert_eq!(first.unchanged, 0);

        let second = generator.generate(temp.path()).unwrap();
        assert_eq!(second.written, 0);
        assert_eq!(second.unchanged, 7);
        assert_eq!(first.files, second.files);
    }
}
