//! The spec-wide abstract base exception unit.

use edl_codegen::CodeFragment;
use edl_ir::Spec;

use crate::ast::{JavaClass, JavaField, JavaMethod, str_lit};
use crate::java_file::JavaFile;
use crate::naming::base_class;

const MAP: &str = "Map<String, Object>";

/// Renders `<Base>Exception`, the root of the generated hierarchy. It
/// holds the code, both templates, and the details map, and owns the
/// runtime template rendering.
pub struct BaseException<'a> {
    spec: &'a Spec,
}

impl<'a> BaseException<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    pub fn class_name(&self) -> String {
        base_class(self.spec)
    }

    pub fn render(&self) -> String {
        let name = self.class_name();

        let constructor = JavaMethod::constructor("protected", &name)
            .param("String", "code")
            .param("String", "descriptionTemplate")
            .param("String", "detailTemplate")
            .param(MAP, "details")
            .param("Throwable", "cause")
            .line("super(descriptionTemplate, cause);")
            .line("this.code = Objects.requireNonNull(code, \"code\");")
            .line(
                "this.descriptionTemplate = \
                 Objects.requireNonNull(descriptionTemplate, \"descriptionTemplate\");",
            )
            .line("this.detailTemplate = Objects.requireNonNull(detailTemplate, \"detailTemplate\");")
            .line("this.details = Map.copyOf(Objects.requireNonNull(details, \"details\"));");

        let render_values = JavaMethod::new("private", MAP, "renderValues")
            .line(format!("{MAP} values = new LinkedHashMap<>(details);"))
            .line("values.put(\"source\", SOURCE);")
            .line("values.put(\"code\", code);")
            .line("values.put(\"recoverable\", recoverable());")
            .line("return values;");

        let render_template = JavaMethod::new("private static", "String", "renderTemplate")
            .param("String", "template")
            .param(MAP, "values")
            .line("String resolved = template;")
            .fragment(CodeFragment::braced(
                "for (Map.Entry<String, Object> entry : values.entrySet())",
                vec![CodeFragment::line(
                    "resolved = resolved.replace(\"{\" + entry.getKey() + \"}\", \
                     String.valueOf(entry.getValue()));",
                )],
            ))
            .line("return resolved;");

        let class = JavaClass::new(&name)
            .modifier("abstract")
            .extends("RuntimeException")
            .field(
                JavaField::new("private static final", "String", "SOURCE")
                    .init(str_lit(&self.spec.source)),
            )
            .field(JavaField::new("private final", "String", "code"))
            .field(JavaField::new("private final", "String", "descriptionTemplate"))
            .field(JavaField::new("private final", "String", "detailTemplate"))
            .field(JavaField::new("private final", MAP, "details"))
            .method(constructor)
            .method(JavaMethod::new("public", "String", "code").line("return code;"))
            .method(
                JavaMethod::new("public", "String", "descriptionTemplate")
                    .line("return descriptionTemplate;"),
            )
            .method(
                JavaMethod::new("public", "String", "description")
                    .line("return renderTemplate(descriptionTemplate, renderValues());"),
            )
            .method(
                JavaMethod::new("public", "String", "detailTemplate")
                    .line("return detailTemplate;"),
            )
            .method(
                JavaMethod::new("public", "String", "detail")
                    .line("return renderTemplate(detailTemplate, renderValues());"),
            )
            .method(JavaMethod::new("public", MAP, "details").line("return details;"))
            .method(JavaMethod::new("public", "String", "source").line("return SOURCE;"))
            .method(JavaMethod::new("public", MAP, "errorInfo").line("return coreValues();"))
            .method(JavaMethod::new("public", "boolean", "recoverable").line("return false;"))
            .method(JavaMethod::new("public", "int", "httpStatus").line("return 500;"))
            .method(JavaMethod::abstract_method("protected abstract", MAP, "coreValues"))
            .method(render_values)
            .method(render_template);

        JavaFile::new(&self.spec.package, class)
            .import("java.util.LinkedHashMap")
            .import("java.util.Map")
            .import("java.util.Objects")
            .render()
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
categories: {}
errors: {}
",
            "edl.yaml",
        )
        .expect("valid yaml");
        edl_spec::parse(&doc).spec.expect("spec should parse")
    }

    #[test]
    fn test_base_exception_shape() {
        let spec = sample_spec();
        let rendered = BaseException::new(&spec).render();

        assert!(rendered.starts_with("package com.example.catalog;\n"));
        assert!(rendered.contains("public abstract class CatalogException extends RuntimeException {"));
        assert!(rendered.contains("private static final String SOURCE = \"catalog-service\";"));
        assert!(rendered.contains("protected abstract Map<String, Object> coreValues();"));
        assert!(rendered.contains("return renderTemplate(descriptionTemplate, renderValues());"));
        assert!(rendered.contains("public int httpStatus() {\n    return 500;"));
        assert!(rendered.contains("values.put(\"recoverable\", recoverable());"));
    }
}
