//! One Java source file: package declaration, imports, one top-level type.

use edl_codegen::CodeBuilder;

use crate::ast::JavaClass;

/// Assembles a package declaration, a sorted import block, and a class
/// into the final source text.
pub struct JavaFile {
    package: String,
    imports: Vec<String>,
    class: JavaClass,
}

impl JavaFile {
    pub fn new(package: impl Into<String>, class: JavaClass) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            class,
        }
    }

    /// Add an import (deduplicated and sorted at render time).
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.push_line(&format!("package {};", self.package));
        builder.push_blank();

        let mut imports = self.imports.clone();
        imports.sort();
        imports.dedup();
        if !imports.is_empty() {
            for import in &imports {
                builder.push_line(&format!("import {import};"));
            }
            builder.push_blank();
        }

        builder.emit(&self.class);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{JavaField, JavaMethod};

    use super::*;

    #[test]
    fn test_file_layout() {
        let class = JavaClass::new("TinyException")
            .modifier("final")
            .extends("RuntimeException")
            .field(JavaField::new("private final", "String", "code"))
            .method(
                JavaMethod::constructor("public", "TinyException")
                    .param("String", "code")
                    .line("this.code = Objects.requireNonNull(code, \"code\");"),
            );
        let rendered = JavaFile::new("com.example", class)
            .import("java.util.Objects")
            .render();

        insta::assert_snapshot!(rendered, @r###"
        package com.example;

        import java.util.Objects;

        public final class TinyException extends RuntimeException {
          private final String code;

          public TinyException(String code) {
            this.code = Objects.requireNonNull(code, "code");
          }
        }
        "###);
    }

    #[test]
    fn test_imports_sorted_and_deduped() {
        let rendered = JavaFile::new("com.example", JavaClass::new("Empty"))
            .import("java.util.Map")
            .import("java.util.LinkedHashMap")
            .import("java.util.Map")
            .render();
        let import_lines: Vec<&str> = rendered
            .lines()
            .filter(|l| l.starts_with("import "))
            .collect();
        assert_eq!(
            import_lines,
            ["import java.util.LinkedHashMap;", "import java.util.Map;"]
        );
    }
}
