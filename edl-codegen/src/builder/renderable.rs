//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes convert themselves into fragments; [`super::CodeBuilder`]
//! turns fragments into indented text. This keeps the node types free of
//! any direct coupling to the output buffer.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended, current indentation applied).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, indented body, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments one level.
    Indent(Vec<CodeFragment>),
    /// A flat sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A single-line `/** ... */` doc comment.
    JavaDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A `header { body }` block, the common Java shape.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        let header = header.into();
        Self::Block {
            header: format!("{header} {{"),
            body,
            close: Some("}".to_string()),
        }
    }
}

/// Types that can be converted into code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
