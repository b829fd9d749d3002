//! Java class structure rendered as data.
//!
//! Inheritance is a parent name plus member lists rendered to text; the
//! generator never leans on anything richer than these three node types.

use edl_codegen::{CodeFragment, Renderable};

/// A Java class declaration.
#[derive(Debug, Clone)]
pub struct JavaClass {
    annotations: Vec<String>,
    modifiers: Vec<String>,
    name: String,
    extends: Option<String>,
    fields: Vec<JavaField>,
    methods: Vec<JavaMethod>,
    nested: Vec<JavaClass>,
}

impl JavaClass {
    /// Create a public class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: vec!["public".to_string()],
            name: name.into(),
            extends: None,
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Append a modifier after `public` (e.g. `abstract`, `final`,
    /// `static final`).
    pub fn modifier(mut self, modifier: &str) -> Self {
        self.modifiers.push(modifier.to_string());
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn field(mut self, field: JavaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: JavaMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn nested(mut self, class: JavaClass) -> Self {
        self.nested.push(class);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let mut header = format!("{} class {}", self.modifiers.join(" "), self.name);
        if let Some(parent) = &self.extends {
            header.push_str(&format!(" extends {parent}"));
        }
        header
    }
}

impl Renderable for JavaClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for annotation in &self.annotations {
            fragments.push(CodeFragment::line(annotation.clone()));
        }

        let mut body = Vec::new();
        let mut first = true;
        for field in &self.fields {
            if !first {
                body.push(CodeFragment::blank());
            }
            first = false;
            body.extend(field.to_fragments());
        }
        for method in &self.methods {
            if !first {
                body.push(CodeFragment::blank());
            }
            first = false;
            body.extend(method.to_fragments());
        }
        for nested in &self.nested {
            if !first {
                body.push(CodeFragment::blank());
            }
            first = false;
            body.extend(nested.to_fragments());
        }

        fragments.push(CodeFragment::braced(self.header(), body));
        fragments
    }
}

/// A field declaration.
#[derive(Debug, Clone)]
pub struct JavaField {
    modifiers: String,
    ty: String,
    name: String,
    init: Option<String>,
}

impl JavaField {
    pub fn new(modifiers: &str, ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: modifiers.to_string(),
            ty: ty.into(),
            name: name.into(),
            init: None,
        }
    }

    /// Set the initializer expression.
    pub fn init(mut self, expr: impl Into<String>) -> Self {
        self.init = Some(expr.into());
        self
    }
}

impl Renderable for JavaField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match &self.init {
            Some(expr) => format!("{} {} {} = {};", self.modifiers, self.ty, self.name, expr),
            None => format!("{} {} {};", self.modifiers, self.ty, self.name),
        };
        vec![CodeFragment::line(line)]
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone)]
pub struct JavaMethod {
    annotations: Vec<String>,
    modifiers: String,
    /// `None` marks a constructor.
    ret: Option<String>,
    name: String,
    params: Vec<String>,
    /// `None` marks an abstract method.
    body: Option<Vec<CodeFragment>>,
}

impl JavaMethod {
    pub fn new(modifiers: &str, ret: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: modifiers.to_string(),
            ret: Some(ret.into()),
            name: name.into(),
            params: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    pub fn constructor(modifiers: &str, class_name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: modifiers.to_string(),
            ret: None,
            name: class_name.into(),
            params: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    /// A method with no body, rendered with a trailing semicolon.
    pub fn abstract_method(
        modifiers: &str,
        ret: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: modifiers.to_string(),
            ret: Some(ret.into()),
            name: name.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn param(mut self, ty: &str, name: &str) -> Self {
        self.params.push(format!("{ty} {name}"));
        self
    }

    /// Append a statement line to the body.
    pub fn line(mut self, statement: impl Into<String>) -> Self {
        if let Some(body) = &mut self.body {
            body.push(CodeFragment::line(statement));
        }
        self
    }

    /// Append an arbitrary fragment (nested blocks, loops) to the body.
    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        if let Some(body) = &mut self.body {
            body.push(fragment);
        }
        self
    }

    fn header(&self) -> String {
        match &self.ret {
            Some(ret) => format!(
                "{} {} {}({})",
                self.modifiers,
                ret,
                self.name,
                self.params.join(", ")
            ),
            None => format!("{} {}({})", self.modifiers, self.name, self.params.join(", ")),
        }
    }
}

impl Renderable for JavaMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for annotation in &self.annotations {
            fragments.push(CodeFragment::line(annotation.clone()));
        }
        match &self.body {
            Some(body) => fragments.push(CodeFragment::braced(self.header(), body.clone())),
            None => fragments.push(CodeFragment::line(format!("{};", self.header()))),
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use edl_codegen::CodeBuilder;

    use super::*;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_field_with_initializer() {
        let field = JavaField::new("private static final", "String", "SOURCE").init("\"svc\"");
        assert_eq!(
            render(&field),
            "private static final String SOURCE = \"svc\";\n"
        );
    }

    #[test]
    fn test_method() {
        let method = JavaMethod::new("public", "String", "code").line("return code;");
        assert_eq!(render(&method), "public String code() {\n  return code;\n}\n");
    }

    #[test]
    fn test_abstract_method() {
        let method =
            JavaMethod::abstract_method("protected abstract", "Map<String, Object>", "coreValues");
        assert_eq!(
            render(&method),
            "protected abstract Map<String, Object> coreValues();\n"
        );
    }

    #[test]
    fn test_constructor_with_params() {
        let ctor = JavaMethod::constructor("protected", "AppException")
            .param("String", "code")
            .param("Throwable", "cause")
            .line("super(code, cause);");
        assert_eq!(
            render(&ctor),
            "protected AppException(String code, Throwable cause) {\n  super(code, cause);\n}\n"
        );
    }

    #[test]
    fn test_class_layout() {
        let class = JavaClass::new("BillingException")
            .modifier("abstract")
            .extends("CatalogException")
            .field(JavaField::new("private static final", "String", "CODE_PREFIX").init("\"BIL\""))
            .method(JavaMethod::new("public", "boolean", "retryable").line("return true;"));
        assert_eq!(
            render(&class),
            "public abstract class BillingException extends CatalogException {\n  \
             private static final String CODE_PREFIX = \"BIL\";\n\n  \
             public boolean retryable() {\n    return true;\n  }\n}\n"
        );
    }

    #[test]
    fn test_annotated_method() {
        let method = JavaMethod::new("public", "int", "httpStatus")
            .annotation("@Override")
            .line("return 402;");
        assert_eq!(
            render(&method),
            "@Override\npublic int httpStatus() {\n  return 402;\n}\n"
        );
    }
}
