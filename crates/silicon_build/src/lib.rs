//! Per-series build orchestration.
//!
//! A series build loads its sources, expands the pads it declares, merges
//! the chip into a [`SeriesDocument`](silicon_model::SeriesDocument), submits
//! it to the schema gate, resolves encodings and renders the header when the
//! series asks for one, and only then writes artifacts. Any failure aborts
//! that series without touching its output directory. Series are independent
//! and [`build_project`] runs them in parallel.

#![warn(missing_docs)]

pub mod codes;
pub mod discover;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod sources;
pub mod validate;

pub use codes::to_diagnostics;
pub use discover::{discover_series, SeriesDir};
pub use error::{BuildError, BuildErrorKind};
pub use output::{write_artifacts, JSON_FILE, YAML_FILE};
pub use pipeline::{build_series, Artifacts, HeaderArtifact};
pub use project::{build_project, BuildSummary};
pub use sources::{load_series_sources, SeriesSources};
pub use validate::{validate_outputs, ValidateSummary};
