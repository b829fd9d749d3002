//! The shared abstract container base unit.

use edl_ir::Spec;

use crate::ast::{JavaClass, JavaField, JavaMethod};
use crate::java_file::JavaFile;
use crate::naming::{CONTAINER_BASE_CLASS, base_class};

/// Renders `ContainerExceptionBase`: the collected-errors list, the
/// defensive accessors, and the HTTP status constant every container unit
/// passes up.
pub struct ContainerBase<'a> {
    spec: &'a Spec,
}

impl<'a> ContainerBase<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    pub fn class_name(&self) -> &'static str {
        CONTAINER_BASE_CLASS
    }

    pub fn render(&self) -> String {
        let base = base_class(self.spec);
        let list_ty = format!("List<{base}>");

        let class = JavaClass::new(CONTAINER_BASE_CLASS)
            .modifier("abstract")
            .extends("RuntimeException")
            .field(JavaField::new("private final", "int", "httpStatus"))
            .field(
                JavaField::new("protected final", &list_ty, "errors").init("new ArrayList<>()"),
            )
            .method(
                JavaMethod::constructor("protected", CONTAINER_BASE_CLASS)
                    .param("int", "httpStatus")
                    .line("super();")
                    .line("this.httpStatus = httpStatus;"),
            )
            .method(
                JavaMethod::new("public", "void", "add")
                    .param(&base, "error")
                    .line("errors.add(Objects.requireNonNull(error, \"error\"));"),
            )
            .method(
                JavaMethod::new("public", "void", "addAll")
                    .param(&format!("Collection<? extends {base}>"), "errors")
                    .line("this.errors.addAll(Objects.requireNonNull(errors, \"errors\"));"),
            )
            .method(
                JavaMethod::new("public", &list_ty, "errors").line("return List.copyOf(errors);"),
            )
            .method(JavaMethod::new("public", "int", "httpStatus").line("return httpStatus;"));

        JavaFile::new(&self.spec.package, class)
            .import("java.util.ArrayList")
            .import("java.util.Collection")
            .import("java.util.List")
            .import("java.util.Objects")
            .render()
    }
}
