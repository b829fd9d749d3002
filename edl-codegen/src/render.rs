//! Template scanning and rendering.
//!
//! The generated Java carries runtime equivalents of these functions; they
//! live here as well so the generator, the placeholder lint, and the CLI
//! `explain` command all agree on one definition of template semantics.
//!
//! Two rendering modes exist over the tagged [`Value`] tree:
//!
//! - single-error: `{name}` tokens in a string template are substituted
//!   with the stringified field value;
//! - aggregate: a container-response template is walked recursively, and a
//!   single-element list expands once per collected error, in collection
//!   order.

use edl_ir::Value;
use indexmap::IndexMap;

/// The rendered field values of one error, in field order.
pub type FieldValues = IndexMap<String, Value>;

/// Scan a template for `{identifier}` placeholders, in order of first
/// appearance. An identifier starts with an ASCII letter followed by
/// letters, digits, or underscores.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut found = Vec::new();
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        let start = i + 1;
        let mut end = start;
        if end < bytes.len() && bytes[end].is_ascii_alphabetic() {
            end += 1;
            while end < bytes.len()
                && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
            {
                end += 1;
            }
            if end < bytes.len() && bytes[end] == b'}' {
                let name = &template[start..end];
                if !found.iter().any(|f| f == name) {
                    found.push(name.to_string());
                }
                i = end + 1;
                continue;
            }
        }
        i += 1;
    }
    found
}

/// Placeholders across several templates, deduplicated in first-seen order.
pub fn placeholders_of(templates: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for template in templates {
        for name in placeholders(template) {
            if !found.contains(&name) {
                found.push(name);
            }
        }
    }
    found
}

/// Substitute every `{name}` token whose name is present in `values`.
/// Unknown tokens pass through unchanged.
pub fn render_template(template: &str, values: &FieldValues) -> String {
    let mut resolved = template.to_string();
    for (name, value) in values {
        resolved = resolved.replace(&format!("{{{name}}}"), &display_value(value));
    }
    resolved
}

/// Stringify a value the way the generated runtime does.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Int(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Map(_) | Value::List(_) => render_value_literal(value),
    }
}

fn render_value_literal(value: &Value) -> String {
    match value {
        Value::Map(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}={}", render_value_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::List(list) => {
            let items: Vec<String> = list.iter().map(render_value_literal).collect();
            format!("[{}]", items.join(", "))
        }
        other => display_value(other),
    }
}

/// Render an aggregate container template against the collected errors.
///
/// Mappings render key by key; a single-element list is the expansion
/// marker and produces one rendered element per collected error; any other
/// list or scalar passes through as a literal.
pub fn render_container(template: &Value, infos: &[FieldValues]) -> Value {
    match template {
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), render_container(v, infos)))
                .collect(),
        ),
        Value::List(list) if list.len() == 1 => Value::List(
            infos
                .iter()
                .map(|info| render_item(&list[0], info))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Render one template element against a single error's field values.
/// String scalars naming a field are replaced by that field's value; every
/// other scalar is passed through as a literal.
fn render_item(template: &Value, info: &FieldValues) -> Value {
    match template {
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), render_item(v, info)))
                .collect(),
        ),
        Value::List(list) => {
            Value::List(list.iter().map(|v| render_item(v, info)).collect())
        }
        Value::String(key) => match info.get(key) {
            Some(value) => value.clone(),
            None => template.clone(),
        },
        other => other.clone(),
    }
}
