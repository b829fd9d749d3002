//! The Spring `@RestControllerAdvice` handler unit.

use edl_codegen::CodeFragment;
use edl_ir::Spec;

use crate::ast::{JavaClass, JavaMethod};
use crate::java_file::JavaFile;
use crate::naming::{HANDLER_BASE_CLASS, base_class, container_class, handler_class};

const MAP: &str = "Map<String, Object>";
const RESPONSE: &str = "ResponseEntity<Map<String, Object>>";

/// Renders `<Base>ExceptionHandler`: one handler method for the base type
/// and one per container category, driving the aggregate rendering in the
/// handler base.
pub struct Handler<'a> {
    spec: &'a Spec,
}

impl<'a> Handler<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    pub fn class_name(&self) -> String {
        handler_class(self.spec)
    }

    pub fn render(&self) -> String {
        let base = base_class(self.spec);

        let mut class = JavaClass::new(self.class_name())
            .annotation("@RestControllerAdvice")
            .extends(HANDLER_BASE_CLASS)
            .method(
                JavaMethod::new("public", RESPONSE, format!("handle{base}"))
                    .annotation(format!("@ExceptionHandler({base}.class)"))
                    .param(&base, "exception")
                    .line(format!("{MAP} body = mapResponse(exception.errorInfo());"))
                    .line("return ResponseEntity.status(exception.httpStatus()).body(body);"),
            );

        let containers: Vec<_> = self
            .spec
            .categories
            .values()
            .filter(|c| c.is_container)
            .collect();
        for category in &containers {
            let container = container_class(&category.name);
            class = class.method(
                JavaMethod::new("public", RESPONSE, format!("handle{container}"))
                    .annotation(format!("@ExceptionHandler({container}.class)"))
                    .param(&container, "exception")
                    .line(format!("List<{MAP}> infos = new ArrayList<>();"))
                    .fragment(CodeFragment::braced(
                        format!("for ({base} error : exception.errors())"),
                        vec![CodeFragment::line("infos.add(error.errorInfo());")],
                    ))
                    .line("Object rendered = renderContainerTemplate(CONTAINER_TEMPLATE, infos);")
                    .line(format!(
                        "return ResponseEntity.status(exception.httpStatus()).body(({MAP}) rendered);"
                    )),
            );
        }

        let mut file = JavaFile::new(&self.spec.package, class)
            .import("java.util.Map")
            .import("org.springframework.http.ResponseEntity")
            .import("org.springframework.web.bind.annotation.ExceptionHandler")
            .import("org.springframework.web.bind.annotation.RestControllerAdvice");
        if !containers.is_empty() {
            file = file.import("java.util.ArrayList").import("java.util.List");
        }
        file.render()
    }
}
