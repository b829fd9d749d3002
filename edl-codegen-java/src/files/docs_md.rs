//! The optional companion documentation file.

use edl_ir::Spec;

use crate::naming::base_class;

/// Renders `edl-docs.md`, a short summary of what was generated.
pub struct DocsMd<'a> {
    spec: &'a Spec,
}

impl<'a> DocsMd<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    pub fn file_name(&self) -> &'static str {
        "edl-docs.md"
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("# EDL Exceptions\n\n");
        out.push_str("## Package\n\n");
        out.push_str(&format!("`{}`\n\n", self.spec.package));
        out.push_str("## Base Exception\n\n");
        out.push_str(&format!("`{}`\n\n", base_class(self.spec)));
        out.push_str("## Source\n\n");
        out.push_str(&format!("`{}`\n\n", self.spec.source));
        out.push_str("## Categories\n\n");
        out.push_str(&format!(
            "Generated {} category exceptions.\n\n",
            self.spec.categories.len()
        ));
        out.push_str("## Errors\n\n");
        out.push_str(&format!(
            "Generated {} concrete exceptions.\n",
            self.spec.errors.len()
        ));
        out
    }
}
