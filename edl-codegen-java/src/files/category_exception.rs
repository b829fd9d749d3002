//! Category units: one class per exception family.

use edl_ir::{CategoryDef, DERIVED_FIELDS, Spec};

use super::inherited_params;
use crate::ast::{JavaClass, JavaField, JavaMethod, str_lit};
use crate::java_file::JavaFile;
use crate::naming::{base_class, category_class};
use crate::type_mapper::JavaType;

const MAP: &str = "Map<String, Object>";

/// Renders `<Name>Exception` for one category: the code-prefix constant,
/// custom param fields, HTTP/retry metadata, and the `coreValues()`
/// ordering.
pub struct CategoryException<'a> {
    spec: &'a Spec,
    category: &'a CategoryDef,
}

impl<'a> CategoryException<'a> {
    pub fn new(spec: &'a Spec, category: &'a CategoryDef) -> Self {
        Self { spec, category }
    }

    pub fn class_name(&self) -> String {
        category_class(&self.category.name)
    }

    pub fn render(&self) -> String {
        let name = self.class_name();
        let parent = match &self.category.parent {
            Some(parent) => category_class(parent),
            None => base_class(self.spec),
        };
        let inherited = inherited_params(self.spec, self.category);

        let mut class = JavaClass::new(&name);
        if self.category.is_abstract {
            class = class.modifier("abstract");
        }
        class = class.extends(parent).field(
            JavaField::new("private static final", "String", "CODE_PREFIX")
                .init(str_lit(&self.category.code_prefix)),
        );

        for (param, ty) in &self.category.params {
            let rendered_ty = JavaType::parse(ty).render();
            class = class
                .field(JavaField::new("private final", &rendered_ty, param))
                .method(
                    JavaMethod::new("public", &rendered_ty, param)
                        .line(format!("return {param};")),
                );
        }

        class = class.method(self.constructor(&name, &inherited));

        if let Some(status) = self.category.http_status {
            class = class.method(
                JavaMethod::new("public", "int", "httpStatus")
                    .annotation("@Override")
                    .line(format!("return {status};")),
            );
        }
        if let Some(retryable) = self.category.retryable {
            class = class.method(
                JavaMethod::new("public", "boolean", "retryable")
                    .line(format!("return {retryable};")),
            );
        }

        class = class.method(self.core_values());

        JavaFile::new(&self.spec.package, class)
            .import("java.util.LinkedHashMap")
            .import("java.util.Map")
            .import("java.util.Objects")
            .render()
    }

    fn constructor(&self, name: &str, inherited: &[(&String, &String)]) -> JavaMethod {
        let mut ctor = JavaMethod::constructor("protected", name)
            .param("String", "errorCode")
            .param("String", "descriptionTemplate")
            .param("String", "detailTemplate")
            .param(MAP, "details")
            .param("Throwable", "cause");
        for (param, ty) in inherited {
            ctor = ctor.param(&JavaType::parse(ty).render(), param);
        }
        for (param, ty) in &self.category.params {
            ctor = ctor.param(&JavaType::parse(ty).render(), param);
        }

        let mut super_args = vec![
            "CODE_PREFIX + Objects.requireNonNull(errorCode, \"errorCode\")".to_string(),
            "descriptionTemplate".to_string(),
            "detailTemplate".to_string(),
            "details".to_string(),
            "cause".to_string(),
        ];
        super_args.extend(inherited.iter().map(|(param, _)| param.to_string()));
        ctor = ctor.line(format!("super({});", super_args.join(", ")));

        for param in self.category.params.keys() {
            ctor = ctor.line(format!("this.{param} = {param};"));
        }
        ctor
    }

    /// Field order and membership come from the declared param list when
    /// non-empty, otherwise from the fixed derived-field ordering.
    fn core_values(&self) -> JavaMethod {
        let mut method = JavaMethod::new("protected", MAP, "coreValues")
            .annotation("@Override")
            .line(format!("{MAP} values = new LinkedHashMap<>();"));
        if self.category.params.is_empty() {
            for field in DERIVED_FIELDS {
                method = method.line(format!("values.put(\"{field}\", {field}());"));
            }
        } else {
            for param in self.category.params.keys() {
                method = method.line(format!("values.put(\"{param}\", {param});"));
            }
        }
        method.line("return Map.copyOf(values);")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> Spec {
        let doc = edl_spec::SpecDocument::from_str(
            "\
package: com.example.catalog
baseException: Catalog
source: catalog-service
categories:
  Payment:
    codePrefix: PAY
    params:
      tenant: String
  Billing:
    parent: Payment
    codePrefix: BIL
    httpStatus: 402
    retryable: false
    params:
      region: String
  Plain:
    codePrefix: PLN
    abstract: false
errors: {}
",
            "edl.yaml",
        )
        .expect("valid yaml");
        edl_spec::parse(&doc).spec.expect("spec should parse")
    }

    #[test]
    fn test_root_category_extends_base() {
        let spec = sample_spec();
        let rendered = CategoryException::new(&spec, &spec.categories["Payment"]).render();

        assert!(rendered.contains("public abstract class PaymentException extends CatalogException {"));
        assert!(rendered.contains("private static final String CODE_PREFIX = \"PAY\";"));
        assert!(rendered.contains(
            "super(CODE_PREFIX + Objects.requireNonNull(errorCode, \"errorCode\"), \
             descriptionTemplate, detailTemplate, details, cause);"
        ));
        assert!(rendered.contains("this.tenant = tenant;"));
        assert!(rendered.contains("values.put(\"tenant\", tenant);"));
        // declared params take over coreValues membership entirely
        assert!(!rendered.contains("values.put(\"code\", code());"));
    }

    #[test]
    fn test_child_category_threads_inherited_params() {
        let spec = sample_spec();
        let rendered = CategoryException::new(&spec, &spec.categories["Billing"]).render();

        assert!(rendered.contains("public abstract class BillingException extends PaymentException {"));
        assert!(rendered.contains(
            "protected BillingException(String errorCode, String descriptionTemplate, \
             String detailTemplate, Map<String, Object> details, Throwable cause, \
             String tenant, String region) {"
        ));
        assert!(rendered.contains(
            "super(CODE_PREFIX + Objects.requireNonNull(errorCode, \"errorCode\"), \
             descriptionTemplate, detailTemplate, details, cause, tenant);"
        ));
        assert!(rendered.contains("@Override\n  public int httpStatus() {\n    return 402;"));
        assert!(rendered.contains("public boolean retryable() {\n    return false;"));
    }

    #[test]
    fn test_default_core_values_ordering() {
        let spec = sample_spec();
        let rendered = CategoryException::new(&spec, &spec.categories["Plain"]).render();

        assert!(rendered.contains("public class PlainException extends CatalogException {"));
        let src = rendered.find("values.put(\"source\", source());").unwrap();
        let code = rendered.find("values.put(\"code\", code());").unwrap();
        let desc = rendered.find("values.put(\"description\", description());").unwrap();
        let detail = rendered.find("values.put(\"detail\", detail());").unwrap();
        let details = rendered.find("values.put(\"details\", details());").unwrap();
        let recoverable = rendered.find("values.put(\"recoverable\", recoverable());").unwrap();
        assert!(src < code && code < desc && desc < detail && detail < details && details < recoverable);
    }
}
