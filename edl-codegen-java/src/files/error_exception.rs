//! Leaf error units: one final class per declared error, with its builder.

use edl_codegen::render::placeholders_of;
use edl_ir::{CategoryDef, ErrorDef, Spec};

use super::chain_params;
use crate::ast::{JavaClass, JavaField, JavaMethod, str_lit};
use crate::java_file::JavaFile;
use crate::naming::{category_class, error_class, pascal_case};
use crate::type_mapper::JavaType;

const MAP: &str = "Map<String, Object>";

struct ParamSlot {
    name: String,
    ty: JavaType,
    declared: bool,
}

/// Renders `<PascalName>Exception` for one error: template constants, the
/// private constructor, and the synthesized builder.
pub struct ErrorException<'a> {
    spec: &'a Spec,
    category: &'a CategoryDef,
    error: &'a ErrorDef,
}

impl<'a> ErrorException<'a> {
    pub fn new(spec: &'a Spec, category: &'a CategoryDef, error: &'a ErrorDef) -> Self {
        Self {
            spec,
            category,
            error,
        }
    }

    pub fn class_name(&self) -> String {
        error_class(&self.error.name)
    }

    pub fn render(&self) -> String {
        let name = self.class_name();
        let params = self.params();

        let mut class = JavaClass::new(&name)
            .modifier("final")
            .extends(category_class(&self.category.name))
            .field(
                JavaField::new("public static final", "String", "ERROR_CODE")
                    .init(str_lit(&self.error.code)),
            )
            .field(
                JavaField::new("public static final", "String", "DESCRIPTION_TEMPLATE")
                    .init(str_lit(&self.error.description)),
            )
            .field(
                JavaField::new("public static final", "String", "DETAIL_TEMPLATE")
                    .init(str_lit(&self.error.detail)),
            )
            .field(
                JavaField::new("public static final", "boolean", "RECOVERABLE")
                    .init(self.error.recoverable.to_string()),
            );

        for slot in params.iter().filter(|s| s.declared) {
            let ty = slot.ty.render();
            class = class
                .field(JavaField::new("private final", &ty, &slot.name))
                .method(
                    JavaMethod::new("public", &ty, &slot.name)
                        .line(format!("return {};", slot.name)),
                );
        }

        class = class.method(self.constructor(&name, &params));

        if let Some(status) = self.error.http_status {
            class = class.method(
                JavaMethod::new("public", "int", "httpStatus")
                    .annotation("@Override")
                    .line(format!("return {status};")),
            );
        }
        class = class.method(
            JavaMethod::new("public", "boolean", "recoverable")
                .annotation("@Override")
                .line("return RECOVERABLE;"),
        );
        class = class.method(
            JavaMethod::new("public static", "Builder", "builder").line("return new Builder();"),
        );
        class = class.nested(self.builder(&name, &params));

        JavaFile::new(&self.spec.package, class)
            .import("java.util.LinkedHashMap")
            .import("java.util.Map")
            .import("java.util.Objects")
            .render()
    }

    /// Constructor order: the category chain's custom params, then
    /// required, then optional, then the details map and the cause.
    fn params(&self) -> Vec<ParamSlot> {
        let mut params: Vec<ParamSlot> = chain_params(self.spec, self.category)
            .into_iter()
            .map(|(name, ty)| ParamSlot {
                name: name.clone(),
                ty: JavaType::parse(ty),
                declared: false,
            })
            .collect();
        for (name, ty) in self.error.declared_params() {
            params.push(ParamSlot {
                name: name.clone(),
                ty: JavaType::parse(ty),
                declared: true,
            });
        }
        params
    }

    fn constructor(&self, name: &str, params: &[ParamSlot]) -> JavaMethod {
        let mut ctor = JavaMethod::constructor("private", name);
        for slot in params {
            ctor = ctor.param(&slot.ty.render(), &slot.name);
        }
        ctor = ctor.param(MAP, "details").param("Throwable", "cause");

        let mut super_args = vec![
            "ERROR_CODE".to_string(),
            "DESCRIPTION_TEMPLATE".to_string(),
            "DETAIL_TEMPLATE".to_string(),
            "Objects.requireNonNull(details, \"details\")".to_string(),
            "cause".to_string(),
        ];
        super_args.extend(params.iter().filter(|s| !s.declared).map(|s| s.name.clone()));
        ctor = ctor.line(format!("super({});", super_args.join(", ")));

        for slot in params.iter().filter(|s| s.declared) {
            ctor = ctor.line(format!("this.{0} = {0};", slot.name));
        }
        ctor
    }

    /// Builder params are mandatory when they are category chain params,
    /// declared required, referenced by a template placeholder, or typed
    /// as a primitive.
    fn mandatory_names(&self, params: &[ParamSlot]) -> Vec<String> {
        let placeholder_deps =
            placeholders_of(&[&self.error.description, &self.error.detail]);
        params
            .iter()
            .filter(|slot| {
                !slot.declared
                    || self.error.required.contains_key(&slot.name)
                    || placeholder_deps.contains(&slot.name)
                    || slot.ty.is_primitive()
            })
            .map(|slot| slot.name.clone())
            .collect()
    }

    fn builder(&self, exception_name: &str, params: &[ParamSlot]) -> JavaClass {
        let mandatory = self.mandatory_names(params);
        let mut builder = JavaClass::new("Builder").modifier("static final");

        for slot in params {
            builder = builder.field(JavaField::new("private", &slot.ty.boxed(), &slot.name));
        }
        builder = builder.field(JavaField::new("private", "Throwable", "cause"));

        for slot in params {
            builder = builder.method(
                JavaMethod::new("public", "Builder", &slot.name)
                    .param(&slot.ty.render(), &slot.name)
                    .line(format!("this.{0} = {0};", slot.name))
                    .line("return this;"),
            );
        }
        builder = builder.method(
            JavaMethod::new("public", "Builder", "cause")
                .param("Throwable", "cause")
                .line("this.cause = cause;")
                .line("return this;"),
        );

        let mut build = JavaMethod::new("public", exception_name, "build");
        for slot in params {
            let local = format!("resolved{}", pascal_case(&slot.name));
            build = build.line(format!("{} {local} = this.{};", slot.ty.boxed(), slot.name));
            if mandatory.contains(&slot.name) {
                build = build.fragment(edl_codegen::CodeFragment::braced(
                    format!("if ({local} == null)"),
                    vec![edl_codegen::CodeFragment::line(format!(
                        "throw new IllegalStateException(\"Missing required param: {}\");",
                        slot.name
                    ))],
                ));
            }
        }
        build = build.line(format!("{MAP} details = new LinkedHashMap<>();"));
        for slot in params {
            let local = format!("resolved{}", pascal_case(&slot.name));
            build = build.line(format!("details.put(\"{}\", {local});", slot.name));
        }
        let mut args: Vec<String> = params
            .iter()
            .map(|slot| {
                let local = format!("resolved{}", pascal_case(&slot.name));
                match slot.ty.unbox_call() {
                    Some(call) => format!("{local}{call}"),
                    None => local,
                }
            })
            .collect();
        args.push("details".to_string());
        args.push("cause".to_string());
        build = build.line(format!("return new {exception_name}({});", args.join(", ")));

        builder
            .method(build)
            .method(JavaMethod::new("public", "void", "throwException").line("throw build();"))
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
  Billing:
    codePrefix: BIL
    httpStatus: 402
    params:
      tenant: String
errors:
  cardDeclined:
    category: Billing
    fixed:
      code: 7
      description: \"Card {pan} declined\"
      detail: \"Issuer said no\"
    required:
      pan: String
    optional:
      region: String
      attempts: int
    recoverable: true
    httpStatus: 403
",
            "edl.yaml",
        )
        .expect("valid yaml");
        edl_spec::parse(&doc).spec.expect("spec should parse")
    }

    fn render_card_declined() -> String {
        let spec = sample_spec();
        let rendered = ErrorException::new(
            &spec,
            &spec.categories["Billing"],
            &spec.errors["cardDeclined"],
        )
        .render();
        rendered
    }

    #[test]
    fn test_constants_and_inheritance() {
        let rendered = render_card_declined();
        assert!(rendered.contains("public final class CardDeclinedException extends BillingException {"));
        assert!(rendered.contains("public static final String ERROR_CODE = \"0007\";"));
        assert!(rendered.contains(
            "public static final String DESCRIPTION_TEMPLATE = \"Card {pan} declined\";"
        ));
        assert!(rendered.contains("public static final boolean RECOVERABLE = true;"));
        assert!(rendered.contains("@Override\n  public int httpStatus() {\n    return 403;"));
    }

    #[test]
    fn test_constructor_order_and_super() {
        let rendered = render_card_declined();
        assert!(rendered.contains(
            "private CardDeclinedException(String tenant, String pan, String region, \
             int attempts, Map<String, Object> details, Throwable cause) {"
        ));
        assert!(rendered.contains(
            "super(ERROR_CODE, DESCRIPTION_TEMPLATE, DETAIL_TEMPLATE, \
             Objects.requireNonNull(details, \"details\"), cause, tenant);"
        ));
        // declared params get fields; the chain param does not
        assert!(rendered.contains("private final String pan;"));
        assert!(!rendered.contains("private final String tenant;"));
    }

    #[test]
    fn test_builder_mandatory_checks() {
        let rendered = render_card_declined();
        // chain param, required param, primitive param: all mandatory
        assert!(rendered.contains("throw new IllegalStateException(\"Missing required param: tenant\");"));
        assert!(rendered.contains("throw new IllegalStateException(\"Missing required param: pan\");"));
        assert!(rendered.contains("throw new IllegalStateException(\"Missing required param: attempts\");"));
        // plain optional reference param stays nullable
        assert!(!rendered.contains("Missing required param: region"));
    }

    #[test]
    fn test_builder_boxing_and_unboxing() {
        let rendered = render_card_declined();
        assert!(rendered.contains("private Integer attempts;"));
        assert!(rendered.contains("public Builder attempts(int attempts) {"));
        assert!(rendered.contains("Integer resolvedAttempts = this.attempts;"));
        assert!(rendered.contains(
            "return new CardDeclinedException(resolvedTenant, resolvedPan, resolvedRegion, \
             resolvedAttempts.intValue(), details, cause);"
        ));
    }

    #[test]
    fn test_builder_details_order() {
        let rendered = render_card_declined();
        let tenant = rendered.find("details.put(\"tenant\", resolvedTenant);").unwrap();
        let pan = rendered.find("details.put(\"pan\", resolvedPan);").unwrap();
        let region = rendered.find("details.put(\"region\", resolvedRegion);").unwrap();
        let attempts = rendered.find("details.put(\"attempts\", resolvedAttempts);").unwrap();
        assert!(tenant < pan && pan < region && region < attempts);
    }

    #[test]
    fn test_placeholder_dependency_makes_optional_mandatory() {
        let doc = edl_spec::SpecDocument::from_str(
            "\
package: com.example
baseException: App
source: svc
categories:
  Input:
    codePrefix: IN
errors:
  badField:
    category: Input
    fixed:
      code: 1
      description: \"Bad {field} in {region}\"
      detail: \"Plain\"
    required:
      field: String
    optional:
      - region
",
            "edl.yaml",
        )
        .expect("valid yaml");
        let spec = edl_spec::parse(&doc).spec.expect("spec should parse");
        let rendered =
            ErrorException::new(&spec, &spec.categories["Input"], &spec.errors["badField"])
                .render();

        // region is optional but referenced by the description template
        assert!(rendered.contains("Missing required param: region"));
    }
}
