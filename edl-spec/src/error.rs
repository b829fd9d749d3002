use std::path::PathBuf;

use miette::{Diagnostic, NamedSource};
use thiserror::Error;

/// Result type for loader operations (boxed to keep the Ok path small).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the spec file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {message}")]
    #[diagnostic(code(edl::yaml_error))]
    Yaml {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a YAML syntax error with source context.
    pub fn yaml(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Yaml {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }

    /// The plain message, for callers that downgrade this error into a
    /// diagnostic instead of aborting.
    pub fn message(&self) -> String {
        match self {
            Error::Io { path, .. } => format!("failed to read '{}'", path.display()),
            Error::Yaml { message, .. } => message.clone(),
        }
    }
}
