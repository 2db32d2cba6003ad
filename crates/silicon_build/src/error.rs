//! Error types for a series build.

use silicon_codegen::EncodingError;
use silicon_merge::MergeError;
use silicon_pinmux::PinmuxError;
use silicon_schema::SchemaViolation;
use silicon_source::SourceError;
use std::path::PathBuf;

/// A failed series build.
#[derive(Debug, thiserror::Error)]
#[error("series {series}: {kind}")]
pub struct BuildError {
    /// The series that failed.
    pub series: String,
    /// What went wrong.
    #[source]
    pub kind: BuildErrorKind,
}

impl BuildError {
    /// Attaches a series name to a stage error.
    pub fn new(series: impl Into<String>, kind: impl Into<BuildErrorKind>) -> Self {
        Self {
            series: series.into(),
            kind: kind.into(),
        }
    }
}

/// The stage-specific cause of a failed build.
#[derive(Debug, thiserror::Error)]
pub enum BuildErrorKind {
    /// A source document could not be read or parsed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The routing registry is invalid or a pad failed to expand.
    #[error(transparent)]
    Pinmux(#[from] PinmuxError),

    /// The chip could not be merged.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// A function could not be encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The document failed schema validation. Holds every violation.
    #[error("schema validation failed with {} violation(s)", .0.len())]
    SchemaValidationFailed(Vec<SchemaViolation>),

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
