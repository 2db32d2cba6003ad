//! Parsing and validation of `silicon.toml` project configuration files.
//!
//! This crate reads the project configuration and produces a strongly-typed
//! [`ProjectConfig`], and resolves per-series settings (including the header
//! capability flag) into a [`ResolvedSeries`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{
    resolve_series, HeaderSettings, ResolvedSeries, DEFAULT_HEADER_NAME, DOCUMENT_JSON_NAME,
    DOCUMENT_YAML_NAME,
};
pub use types::*;
