//! Configuration types deserialized from `silicon.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The top-level project configuration parsed from `silicon.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Source and output directory layout.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Per-series overrides keyed by series (chip directory) name.
    #[serde(default)]
    pub series: BTreeMap<String, SeriesConfig>,
}

/// Core project metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The series document schema version the schema gate is bound to.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

fn default_schema_version() -> u32 {
    1
}

/// Directory layout, relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PathsConfig {
    /// Directory holding one sub-directory per chip series.
    pub chips: PathBuf,
    /// Directory holding one sub-directory per shared pinmux family.
    pub pinmux: PathBuf,
    /// Directory holding one sub-directory per MPI (memory interface) family.
    pub mpi: PathBuf,
    /// Directory receiving one sub-directory of artifacts per series.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            chips: PathBuf::from("chips"),
            pinmux: PathBuf::from("common/pinmux"),
            mpi: PathBuf::from("common/mpi"),
            output: PathBuf::from("out"),
        }
    }
}

impl PathsConfig {
    /// Returns a copy with every relative path joined onto `root`.
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            chips: root.join(&self.chips),
            pinmux: root.join(&self.pinmux),
            mpi: root.join(&self.mpi),
            output: root.join(&self.output),
        }
    }
}

/// Per-series settings. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    /// Emit the C pinmux header for this series.
    #[serde(default)]
    pub header: bool,
    /// File name of the header artifact.
    pub header_name: Option<String>,
    /// Share structurally identical pin lists between variants.
    pub share_pin_lists: Option<bool>,
}
