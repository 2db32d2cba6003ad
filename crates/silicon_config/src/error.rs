//! Error types for `silicon.toml` loading and validation.

use std::path::PathBuf;

/// Errors raised while loading or validating a project configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML content could not be parsed or has unknown keys.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// A required value is missing or empty.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A value is present but not acceptable.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}
