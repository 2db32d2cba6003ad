//! Error types for source loading.

use std::path::PathBuf;

/// Errors raised while reading or parsing a source document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the expected shape.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// Parser message, including the location when known.
        reason: String,
    },
}

impl SourceError {
    /// The file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::Io { path, .. } | SourceError::Parse { path, .. } => path,
        }
    }
}
