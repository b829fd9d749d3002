//! Typed spec IR: the compiled form of an EDL document.

use indexmap::IndexMap;

use crate::Value;

/// A fully parsed error-taxonomy spec.
///
/// Built once by the parser; read-only for the rest of the compile.
#[derive(Debug, Clone)]
pub struct Spec {
    /// Target package, e.g. `com.example.catalog`.
    pub package: String,
    /// Base exception identifier; the root unit is named `<base>Exception`.
    pub base_exception: String,
    /// Source label embedded in every generated error.
    pub source: String,
    /// Free-form options bag, opaque to the compiler core.
    pub options: IndexMap<String, Value>,
    /// Logical response field → public response key.
    pub response_fields: IndexMap<String, String>,
    /// Optional aggregate-response template for container handlers.
    pub container_response: Option<Value>,
    /// Categories in declaration order.
    pub categories: IndexMap<String, CategoryDef>,
    /// Errors in declaration order.
    pub errors: IndexMap<String, ErrorDef>,
}

impl Spec {
    /// Returns true when any category is flagged as a container.
    pub fn has_containers(&self) -> bool {
        self.categories.values().any(|c| c.is_container)
    }

    /// Walk the parent chain from `category` up to the root, starting with
    /// the category itself. Stops on unknown parents and refuses to loop,
    /// so it is safe on unvalidated specs.
    pub fn ancestry<'a>(&'a self, category: &str) -> Vec<&'a CategoryDef> {
        let mut chain = Vec::new();
        let mut current = self.categories.get(category);
        while let Some(def) = current {
            if chain.iter().any(|c: &&CategoryDef| c.name == def.name) {
                break;
            }
            chain.push(def);
            current = def.parent.as_deref().and_then(|p| self.categories.get(p));
        }
        chain
    }

    /// Errors belonging to `category`, in declaration order.
    pub fn errors_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ErrorDef> {
        self.errors.values().filter(move |e| e.category == category)
    }
}

/// One exception category: an abstract family in the inheritance chain.
#[derive(Debug, Clone)]
pub struct CategoryDef {
    /// PascalCase identifier.
    pub name: String,
    /// Optional parent category; the parent graph must be a forest.
    pub parent: Option<String>,
    /// Code prefix, globally unique, prepended to descendant error codes.
    pub code_prefix: String,
    /// Optional HTTP status carried by this family.
    pub http_status: Option<u16>,
    /// Optional retryability hint.
    pub retryable: Option<bool>,
    /// Whether the generated unit is abstract (default true).
    pub is_abstract: bool,
    /// Whether an aggregate container unit is synthesized (default false).
    pub is_container: bool,
    /// Custom core params: name → Java type string, declaration order.
    pub params: IndexMap<String, String>,
}

/// Which key the spec author used for the detail template.
///
/// The two spellings are interchangeable but mutually exclusive; the parsed
/// key is kept so diagnostics point at the token that is actually present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKey {
    Detail,
    Details,
}

impl DetailKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailKey::Detail => "detail",
            DetailKey::Details => "details",
        }
    }
}

/// One concrete leaf error definition.
#[derive(Debug, Clone)]
pub struct ErrorDef {
    /// camelCase identifier.
    pub name: String,
    /// Owning category name.
    pub category: String,
    /// Numeric code, normalized to a 4-digit zero-padded string.
    pub code: String,
    /// Description template with `{placeholder}` tokens.
    pub description: String,
    /// Detail template with `{placeholder}` tokens.
    pub detail: String,
    /// Which spelling carried the detail template.
    pub detail_key: DetailKey,
    /// Required params: name → Java type string, declaration order.
    pub required: IndexMap<String, String>,
    /// Optional params: name → Java type string, declaration order.
    pub optional: IndexMap<String, String>,
    /// Whether the error is recoverable (default false).
    pub recoverable: bool,
    /// Optional HTTP status override.
    pub http_status: Option<u16>,
}

impl ErrorDef {
    /// All declared params in constructor order: required, then optional.
    pub fn declared_params(&self) -> impl Iterator<Item = (&String, &String)> {
        self.required.iter().chain(self.optional.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, parent: Option<&str>) -> CategoryDef {
        CategoryDef {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            code_prefix: name[..2].to_ascii_uppercase(),
            http_status: None,
            retryable: None,
            is_abstract: true,
            is_container: false,
            params: IndexMap::new(),
        }
    }

    fn spec_with(categories: Vec<CategoryDef>) -> Spec {
        Spec {
            package: "com.example".into(),
            base_exception: "App".into(),
            source: "svc".into(),
            options: IndexMap::new(),
            response_fields: IndexMap::new(),
            container_response: None,
            categories: categories
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
            errors: IndexMap::new(),
        }
    }

    #[test]
    fn test_ancestry_walks_to_root() {
        let spec = spec_with(vec![
            category("Input", None),
            category("Validation", Some("Input")),
            category("Schema", Some("Validation")),
        ]);
        let chain: Vec<&str> = spec
            .ancestry("Schema")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(chain, ["Schema", "Validation", "Input"]);
    }

    #[test]
    fn test_ancestry_survives_cycles() {
        let spec = spec_with(vec![
            category("Alpha", Some("Beta")),
            category("Beta", Some("Alpha")),
        ]);
        let chain = spec.ancestry("Alpha");
        assert_eq!(chain.len(), 2);
    }
}
