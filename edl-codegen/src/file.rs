//! Compilation units and the idempotent write policy.

use std::path::{Path, PathBuf};

use eyre::Result;

/// One generated source artifact: a path relative to the output root and
/// its full rendered content.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    path: PathBuf,
    content: String,
}

impl CompilationUnit {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The path of this unit, relative to the output root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rendered content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write this unit under `base`, leaving an identical file untouched.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        write_if_changed(&base.join(&self.path), &self.content)
    }
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or its content replaced.
    Written,
    /// File already held identical bytes and was left untouched.
    Unchanged,
}

/// Write `content` to `path` only when the on-disk bytes differ.
///
/// An unchanged file is not rewritten, so its modification time survives
/// repeated compiles and downstream build tools see no spurious changes.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if path.exists() {
        let existing = std::fs::read(path)?;
        if existing == content.as_bytes() {
            return Ok(WriteResult::Unchanged);
        }
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(WriteResult::Written)
}
