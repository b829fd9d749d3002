//! Position-tracked YAML loading.
//!
//! Turns YAML text into the generic [`Value`] tree the parser consumes,
//! while recording where every mapping key and list item sits in the
//! source. Scalars are classified from their text (null, booleans,
//! integers, everything else a string); the spec parser is lenient enough
//! that quoting ambiguity never changes the outcome for well-formed specs.

use std::path::Path;

use edl_ir::{Diagnostic, Location, Severity, Value};
use indexmap::IndexMap;
use marked_yaml::types::{MarkedScalarNode, Node};

use crate::error::{Error, Result};
use crate::location::LocationIndex;

/// A loaded spec file: its generic tree plus the location index.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    file: String,
    root: Value,
    locations: LocationIndex,
}

impl SpecDocument {
    /// Load and parse a spec file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::from_str(&content, path.display().to_string())
    }

    /// Parse spec content, using `file` for diagnostics.
    pub fn from_str(content: &str, file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        let node = marked_yaml::parse_yaml(0, content)
            .map_err(|e| Error::yaml(e.to_string(), content, &file))?;
        let mut locations = LocationIndex::new();
        let root = build(&node, "", &mut locations);
        Ok(Self {
            file,
            root,
            locations,
        })
    }

    /// Assemble a document from an already-built tree. Used by tests and by
    /// callers that source the tree from somewhere other than a YAML file.
    pub fn from_parts(file: impl Into<String>, root: Value, locations: LocationIndex) -> Self {
        Self {
            file: file.into(),
            root,
            locations,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    /// Build a diagnostic stamped with this document's file name and the
    /// source location of `path`, when the index has one.
    pub fn diagnostic(
        &self,
        severity: Severity,
        message: impl Into<String>,
        path: &str,
    ) -> Diagnostic {
        let diag = match severity {
            Severity::Error => Diagnostic::error(message),
            Severity::Warning => Diagnostic::warning(message),
        };
        diag.at(path)
            .in_file(&self.file)
            .located(self.locations.get(path))
    }

    /// Shorthand for an error diagnostic at `path`.
    pub fn error_at(&self, message: impl Into<String>, path: &str) -> Diagnostic {
        self.diagnostic(Severity::Error, message, path)
    }

    /// Shorthand for a warning diagnostic at `path`.
    pub fn warning_at(&self, message: impl Into<String>, path: &str) -> Diagnostic {
        self.diagnostic(Severity::Warning, message, path)
    }
}

fn build(node: &Node, path: &str, locations: &mut LocationIndex) -> Value {
    match node {
        Node::Mapping(mapping) => {
            let mut map = IndexMap::new();
            for (key, value) in mapping.iter() {
                let name: &str = key;
                let child_path = if path.is_empty() {
                    name.to_string()
                } else {
                    format!("{path}.{name}")
                };
                if let Some(marker) = key.span().start() {
                    locations.insert(
                        child_path.as_str(),
                        Location::new(marker.line(), marker.column()),
                    );
                }
                let child = build(value, &child_path, locations);
                map.insert(name.to_string(), child);
            }
            Value::Map(map)
        }
        Node::Sequence(sequence) => {
            let mut list = Vec::new();
            for (index, item) in sequence.iter().enumerate() {
                let child_path = format!("{path}[{index}]");
                if let Some(location) = item_location(item) {
                    locations.insert(child_path.as_str(), location);
                }
                list.push(build(item, &child_path, locations));
            }
            Value::List(list)
        }
        Node::Scalar(scalar) => scalar_value(scalar),
    }
}

fn item_location(node: &Node) -> Option<Location> {
    let span = match node {
        Node::Mapping(n) => n.span(),
        Node::Sequence(n) => n.span(),
        Node::Scalar(n) => n.span(),
    };
    span.start().map(|m| Location::new(m.line(), m.column()))
}

fn scalar_value(scalar: &MarkedScalarNode) -> Value {
    let text: &str = scalar;
    match text {
        "" | "~" | "null" | "Null" | "NULL" => Value::Null,
        "true" | "True" => Value::Bool(true),
        "false" | "False" => Value::Bool(false),
        _ => match text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::String(text.to_string()),
        },
    }
}
