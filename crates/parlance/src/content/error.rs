//! Errors from loading content and data files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading templates or data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a content or data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON of the expected shape.
    #[error("invalid JSON in {origin} at {line}:{column}: {source}")]
    Json {
        origin: String,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        LoadError::Json {
            origin: origin.into(),
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
