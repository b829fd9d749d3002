//! Naming rules for generated Java types.

use std::path::PathBuf;

use edl_ir::Spec;

/// Uppercase the first character (camelCase error names become class-ready
/// PascalCase; already-Pascal names pass through).
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Class name of the spec-wide base exception unit.
pub fn base_class(spec: &Spec) -> String {
    format!("{}Exception", spec.base_exception)
}

/// Class name of a category unit.
pub fn category_class(name: &str) -> String {
    format!("{name}Exception")
}

/// Class name of a leaf error unit.
pub fn error_class(name: &str) -> String {
    format!("{}Exception", pascal_case(name))
}

/// Class name of a container unit.
pub fn container_class(name: &str) -> String {
    format!("{name}ContainerException")
}

/// The shared abstract container base.
pub const CONTAINER_BASE_CLASS: &str = "ContainerExceptionBase";

/// The shared abstract handler base.
pub const HANDLER_BASE_CLASS: &str = "ExceptionHandlerBase";

/// Class name of the generated handler.
pub fn handler_class(spec: &Spec) -> String {
    format!("{}Handler", base_class(spec))
}

/// Directory for the spec's package: dot segments become path segments.
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').collect()
}
