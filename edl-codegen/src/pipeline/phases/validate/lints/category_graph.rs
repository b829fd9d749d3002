//! Lint for the category graph: prefixes, parents, reserved params, cycles.

use std::collections::HashMap;

use edl_ir::{Diagnostic, Spec, is_derived_field};
use edl_spec::SpecDocument;
use indexmap::IndexMap;

use super::super::Lint;

/// Lint that checks code-prefix uniqueness, parent references, reserved
/// names in category params, and acyclicity of the parent graph.
pub struct CategoryGraphLint;

impl Lint for CategoryGraphLint {
    fn name(&self) -> &'static str {
        "category-graph"
    }

    fn description(&self) -> &'static str {
        "Code prefixes are unique and the parent graph is an acyclic forest"
    }

    fn check(&self, spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut prefix_owner: IndexMap<&str, &str> = IndexMap::new();
        for category in spec.categories.values() {
            match prefix_owner.get(category.code_prefix.as_str()) {
                Some(first) => diagnostics.push(document.error_at(
                    format!(
                        "Duplicate code prefix '{}' used by categories {} and {}",
                        category.code_prefix, first, category.name
                    ),
                    &format!("categories.{}.codePrefix", category.name),
                )),
                None => {
                    prefix_owner.insert(&category.code_prefix, &category.name);
                }
            }
        }

        for category in spec.categories.values() {
            if let Some(parent) = &category.parent {
                if !spec.categories.contains_key(parent) {
                    diagnostics.push(document.error_at(
                        format!("Unknown parent category '{parent}'"),
                        &format!("categories.{}.parent", category.name),
                    ));
                }
            }
            for param in category.params.keys() {
                if is_derived_field(param) {
                    diagnostics.push(document.error_at(
                        format!("'{param}' is a derived field name and cannot be a category param"),
                        &format!("categories.{}.params.{param}", category.name),
                    ));
                }
            }
        }

        detect_cycles(spec, document, diagnostics);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Three-color DFS over the parent-pointer graph. A gray node re-entered
/// while still on the DFS stack closes a cycle; one diagnostic is emitted
/// per DFS root that closes one, at that root's `parent` path.
fn detect_cycles(spec: &Spec, document: &SpecDocument, diagnostics: &mut Vec<Diagnostic>) {
    let mut colors: HashMap<&str, Color> = spec
        .categories
        .keys()
        .map(|name| (name.as_str(), Color::White))
        .collect();

    for root in spec.categories.keys() {
        let unvisited = colors.get(root.as_str()).copied() == Some(Color::White);
        if unvisited && visit(root, spec, &mut colors) {
            diagnostics.push(document.error_at(
                format!("Category inheritance cycle detected at {root}"),
                &format!("categories.{root}.parent"),
            ));
        }
    }
}

fn visit<'a>(name: &'a str, spec: &'a Spec, colors: &mut HashMap<&'a str, Color>) -> bool {
    colors.insert(name, Color::Gray);
    let parent = spec
        .categories
        .get(name)
        .and_then(|c| c.parent.as_deref())
        .filter(|p| spec.categories.contains_key(*p));
    if let Some(parent) = parent {
        match colors.get(parent).copied().unwrap_or(Color::White) {
            Color::Gray => {
                colors.insert(name, Color::Black);
                return true;
            }
            Color::White => {
                if visit(parent, spec, colors) {
                    colors.insert(name, Color::Black);
                    return true;
                }
            }
            Color::Black => {}
        }
    }
    colors.insert(name, Color::Black);
    false
}
