//! Spec parser: generic tree → typed IR.
//!
//! Parsing is exhaustive: a malformed category or error is dropped with its
//! diagnostics while siblings continue to parse, and every independently
//! readable field is read even when the overall parse cannot produce a
//! spec. The outcome carries a spec only when all five top-level required
//! pieces (package, baseException, source, categories, errors) survived.

use edl_ir::{CategoryDef, DERIVED_FIELDS, DetailKey, Diagnostic, ErrorDef, Spec, Value};
use indexmap::IndexMap;

use crate::SpecDocument;

/// Result of one parse: the spec (when it materialized) and every
/// diagnostic collected along the way.
#[derive(Debug)]
pub struct ParseOutcome {
    pub spec: Option<Spec>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a loaded document into the typed IR.
pub fn parse(doc: &SpecDocument) -> ParseOutcome {
    Parser {
        doc,
        diagnostics: Vec::new(),
    }
    .run()
}

struct Parser<'a> {
    doc: &'a SpecDocument,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    fn run(mut self) -> ParseOutcome {
        let Some(root) = self.doc.root().as_map() else {
            self.error("Top level of the spec must be a map", "");
            return ParseOutcome {
                spec: None,
                diagnostics: self.diagnostics,
            };
        };

        let package = self.read_string(root, "package", true);
        let base_exception = self.read_string(root, "baseException", true);
        if root.contains_key("rootException") {
            self.error(
                "Use 'baseException' instead of 'rootException'",
                "rootException",
            );
        }
        let source = self.read_string(root, "source", true);
        let options = self.read_value_map(root, "options");
        let response = self.read_string_map(root, "response", false);
        let container_response = root
            .get("containerResponse")
            .filter(|v| !v.is_null())
            .cloned();
        let categories = self.read_categories(root);
        let errors = self.read_errors(root);

        let (Some(package), Some(base_exception), Some(source), Some(categories), Some(errors)) =
            (package, base_exception, source, categories, errors)
        else {
            return ParseOutcome {
                spec: None,
                diagnostics: self.diagnostics,
            };
        };

        let response_fields = response.unwrap_or_else(default_response_fields);

        ParseOutcome {
            spec: Some(Spec {
                package,
                base_exception,
                source,
                options,
                response_fields,
                container_response,
                categories,
                errors,
            }),
            diagnostics: self.diagnostics,
        }
    }

    fn read_categories(
        &mut self,
        root: &'a IndexMap<String, Value>,
    ) -> Option<IndexMap<String, CategoryDef>> {
        let raw = match root.get("categories") {
            None | Some(Value::Null) => {
                self.error("Missing required key 'categories'", "categories");
                return None;
            }
            Some(Value::Map(entries)) => entries,
            Some(other) => {
                self.error(
                    format!("categories must be a map, found {}", other.kind()),
                    "categories",
                );
                return None;
            }
        };

        let mut categories = IndexMap::new();
        for (name, value) in raw {
            let path = format!("categories.{name}");
            let Some(map) = value.as_map() else {
                self.error("Category must be a map", &path);
                continue;
            };
            let parent = self.read_string(map, &format!("{path}.parent"), false);
            let code_prefix = self.read_string(map, &format!("{path}.codePrefix"), true);
            let http_status = self.read_http_status(map, &format!("{path}.httpStatus"));
            let retryable = self.read_bool(map, &format!("{path}.retryable"));
            let abstract_flag = self.read_bool(map, &format!("{path}.abstract"));
            let container_flag = self.read_bool(map, &format!("{path}.container"));
            let params = self
                .read_string_map(map, &format!("{path}.params"), false)
                .unwrap_or_default();
            let Some(code_prefix) = code_prefix else {
                continue;
            };
            categories.insert(
                name.clone(),
                CategoryDef {
                    name: name.clone(),
                    parent,
                    code_prefix,
                    http_status,
                    retryable,
                    is_abstract: abstract_flag.unwrap_or(true),
                    is_container: container_flag.unwrap_or(false),
                    params,
                },
            );
        }
        Some(categories)
    }

    fn read_errors(
        &mut self,
        root: &'a IndexMap<String, Value>,
    ) -> Option<IndexMap<String, ErrorDef>> {
        let raw = match root.get("errors") {
            None | Some(Value::Null) => {
                self.error("Missing required key 'errors'", "errors");
                return None;
            }
            Some(Value::Map(entries)) => entries,
            Some(other) => {
                self.error(
                    format!("errors must be a map, found {}", other.kind()),
                    "errors",
                );
                return None;
            }
        };

        let mut errors = IndexMap::new();
        for (name, value) in raw {
            let path = format!("errors.{name}");
            let Some(map) = value.as_map() else {
                self.error("Error must be a map", &path);
                continue;
            };
            let category = self.read_string(map, &format!("{path}.category"), true);

            let fixed = match map.get("fixed") {
                None | Some(Value::Null) => {
                    self.error("Missing required key 'fixed'", &format!("{path}.fixed"));
                    None
                }
                Some(Value::Map(entries)) => Some(entries),
                Some(_) => {
                    self.error("Expected map for 'fixed'", &format!("{path}.fixed"));
                    None
                }
            };
            let mut code = None;
            let mut description = None;
            let mut detail = None;
            if let Some(fixed) = fixed {
                description = self.read_string(fixed, &format!("{path}.fixed.description"), true);
                detail = self.read_detail(fixed, &path);
                match fixed.get("code") {
                    None | Some(Value::Null) => {
                        self.error("Missing required key 'code'", &format!("{path}.fixed.code"));
                    }
                    Some(value) => code = self.coerce_code(value, &format!("{path}.fixed.code")),
                }
            }

            let required = self
                .read_string_map(map, &format!("{path}.required"), false)
                .unwrap_or_default();
            let optional = self.read_params_map_or_list(map, &format!("{path}.optional"));
            let recoverable = self.read_bool(map, &format!("{path}.recoverable"));
            let http_status = self.read_http_status(map, &format!("{path}.httpStatus"));

            let (Some(category), Some(code), Some(description), Some((detail, detail_key))) =
                (category, code, description, detail)
            else {
                continue;
            };
            errors.insert(
                name.clone(),
                ErrorDef {
                    name: name.clone(),
                    category,
                    code,
                    description,
                    detail,
                    detail_key,
                    required,
                    optional,
                    recoverable: recoverable.unwrap_or(false),
                    http_status,
                },
            );
        }
        Some(errors)
    }

    /// Exactly one of `detail`/`details` must carry the detail template.
    fn read_detail(
        &mut self,
        fixed: &'a IndexMap<String, Value>,
        path: &str,
    ) -> Option<(String, DetailKey)> {
        let has_detail = fixed.get("detail").is_some_and(|v| !v.is_null());
        let has_details = fixed.get("details").is_some_and(|v| !v.is_null());
        match (has_detail, has_details) {
            (true, true) => {
                self.error(
                    "Use either 'detail' or 'details', not both",
                    &format!("{path}.fixed"),
                );
                None
            }
            (true, false) => self
                .read_string(fixed, &format!("{path}.fixed.detail"), true)
                .map(|d| (d, DetailKey::Detail)),
            (false, true) => self
                .read_string(fixed, &format!("{path}.fixed.details"), true)
                .map(|d| (d, DetailKey::Details)),
            (false, false) => {
                self.error(
                    "Missing required key 'detail' or 'details'",
                    &format!("{path}.fixed.detail"),
                );
                None
            }
        }
    }

    /// Accept an integer or a 1–4 digit string, normalized to a 4-digit
    /// zero-padded code.
    fn coerce_code(&mut self, value: &Value, path: &str) -> Option<String> {
        match value {
            Value::Int(n) => {
                if (0..=9999).contains(n) {
                    Some(format!("{n:04}"))
                } else {
                    self.error("Error code must be between 0 and 9999", path);
                    None
                }
            }
            Value::String(s) => {
                if (1..=4).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
                    match s.parse::<i64>() {
                        Ok(n) => Some(format!("{n:04}")),
                        Err(_) => {
                            self.error("Error code must be 1 to 4 digits", path);
                            None
                        }
                    }
                } else {
                    self.error("Error code must be 1 to 4 digits", path);
                    None
                }
            }
            _ => {
                self.error("Error code must be a number or string", path);
                None
            }
        }
    }

    fn read_string(
        &mut self,
        map: &'a IndexMap<String, Value>,
        path: &str,
        required: bool,
    ) -> Option<String> {
        let key = key_of(path);
        match map.get(key) {
            None | Some(Value::Null) => {
                if required {
                    self.error(format!("Missing required key '{key}'"), path);
                }
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.error(
                    format!("Expected string for '{key}', found {}", other.kind()),
                    path,
                );
                None
            }
        }
    }

    /// Optional integer field constrained to the HTTP status range.
    /// Integers written as strings are accepted the way the rest of the
    /// scalar readers are lenient.
    fn read_http_status(&mut self, map: &'a IndexMap<String, Value>, path: &str) -> Option<u16> {
        let key = key_of(path);
        let value = map.get(key)?;
        if value.is_null() {
            return None;
        }
        let number = match value {
            Value::Int(n) => Some(*n),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match number {
            Some(n) if (100..=599).contains(&n) => Some(n as u16),
            Some(_) => {
                self.error(format!("'{key}' must be a valid HTTP status"), path);
                None
            }
            None => {
                self.error(format!("Expected integer for '{key}'"), path);
                None
            }
        }
    }

    fn read_bool(&mut self, map: &'a IndexMap<String, Value>, path: &str) -> Option<bool> {
        let key = key_of(path);
        match map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Some(true),
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Some(false),
            Some(_) => {
                self.error(format!("Expected boolean for '{key}'"), path);
                None
            }
        }
    }

    /// Read a name → string mapping (params, response fields).
    fn read_string_map(
        &mut self,
        map: &'a IndexMap<String, Value>,
        path: &str,
        required: bool,
    ) -> Option<IndexMap<String, String>> {
        let key = key_of(path);
        match map.get(key) {
            None | Some(Value::Null) => {
                if required {
                    self.error(format!("Missing required key '{key}'"), path);
                }
                None
            }
            Some(Value::Map(entries)) => {
                let mut result = IndexMap::new();
                for (name, value) in entries {
                    match value.as_str() {
                        Some(s) => {
                            result.insert(name.clone(), s.to_string());
                        }
                        None => {
                            self.error(
                                "Param types must be strings",
                                &format!("{path}.{name}"),
                            );
                        }
                    }
                }
                Some(result)
            }
            Some(other) => {
                self.error(
                    format!("Expected map for '{key}', found {}", other.kind()),
                    path,
                );
                None
            }
        }
    }

    /// Optional params accept either a name → type map or a bare list of
    /// names, each implicitly typed `String`.
    fn read_params_map_or_list(
        &mut self,
        map: &'a IndexMap<String, Value>,
        path: &str,
    ) -> IndexMap<String, String> {
        let key = key_of(path);
        match map.get(key) {
            None | Some(Value::Null) => IndexMap::new(),
            Some(Value::Map(_)) => self.read_string_map(map, path, false).unwrap_or_default(),
            Some(Value::List(items)) => {
                let mut result = IndexMap::new();
                for (index, item) in items.iter().enumerate() {
                    match item.as_str() {
                        Some(name) => {
                            result.insert(name.to_string(), "String".to_string());
                        }
                        None => {
                            self.error(
                                "Optional param names must be strings",
                                &format!("{path}[{index}]"),
                            );
                        }
                    }
                }
                result
            }
            Some(other) => {
                self.error(
                    format!("Expected map or list for '{key}', found {}", other.kind()),
                    path,
                );
                IndexMap::new()
            }
        }
    }

    /// Free-form map kept as-is (the options bag).
    fn read_value_map(
        &mut self,
        map: &'a IndexMap<String, Value>,
        path: &str,
    ) -> IndexMap<String, Value> {
        let key = key_of(path);
        match map.get(key) {
            None | Some(Value::Null) => IndexMap::new(),
            Some(Value::Map(entries)) => entries.clone(),
            Some(other) => {
                self.error(
                    format!("Expected map for '{key}', found {}", other.kind()),
                    path,
                );
                IndexMap::new()
            }
        }
    }

    fn error(&mut self, message: impl Into<String>, path: &str) {
        self.diagnostics.push(self.doc.error_at(message, path));
    }
}

fn key_of(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

fn default_response_fields() -> IndexMap<String, String> {
    DERIVED_FIELDS
        .iter()
        .map(|f| (f.to_string(), f.to_string()))
        .collect()
}
