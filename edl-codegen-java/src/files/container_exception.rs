//! Per-category aggregate container units.

use edl_ir::{CategoryDef, Spec};

use crate::ast::{JavaClass, JavaField, JavaMethod};
use crate::java_file::JavaFile;
use crate::naming::{CONTAINER_BASE_CLASS, container_class};

/// Fallback status when a container category declares none.
const DEFAULT_HTTP_STATUS: u16 = 500;

/// Renders `<Name>ContainerException` for one container-flagged category.
pub struct ContainerException<'a> {
    spec: &'a Spec,
    category: &'a CategoryDef,
}

impl<'a> ContainerException<'a> {
    pub fn new(spec: &'a Spec, category: &'a CategoryDef) -> Self {
        Self { spec, category }
    }

    pub fn class_name(&self) -> String {
        container_class(&self.category.name)
    }

    pub fn render(&self) -> String {
        let name = self.class_name();
        let status = self.category.http_status.unwrap_or(DEFAULT_HTTP_STATUS);

        let class = JavaClass::new(&name)
            .modifier("final")
            .extends(CONTAINER_BASE_CLASS)
            .field(
                JavaField::new("private static final", "int", "HTTP_STATUS")
                    .init(status.to_string()),
            )
            .method(JavaMethod::constructor("public", &name).line("super(HTTP_STATUS);"));

        JavaFile::new(&self.spec.package, class).render()
    }
}
