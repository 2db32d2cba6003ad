//! Series resolution: merging project defaults with per-series overrides.

use crate::types::ProjectConfig;

/// Default file name of the generated pinmux header.
pub const DEFAULT_HEADER_NAME: &str = "pinmux.h";
/// File name of the YAML series document in a series output directory.
pub const DOCUMENT_YAML_NAME: &str = "series.yaml";
/// File name of the JSON series document in a series output directory.
pub const DOCUMENT_JSON_NAME: &str = "series.json";

/// Header generation settings, present only for series that request a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSettings {
    /// File name of the header artifact inside the series output directory.
    pub file_name: String,
}

/// Fully resolved build settings for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSeries {
    /// The series (chip directory) name.
    pub name: String,
    /// Schema version the produced document is validated against.
    pub schema_version: u32,
    /// Header capability: `None` means the series emits no header.
    pub header: Option<HeaderSettings>,
    /// Whether identical variant pin lists are stored once.
    pub share_pin_lists: bool,
}

/// Resolves the settings for a series.
///
/// Series with no `[series.<name>]` table get the defaults: no header and
/// pin-list sharing enabled. Resolution never fails; every chip directory is
/// a buildable series whether or not the configuration mentions it.
pub fn resolve_series(config: &ProjectConfig, name: &str) -> ResolvedSeries {
    let overrides = config.series.get(name).cloned().unwrap_or_default();

    let header = overrides.header.then(|| HeaderSettings {
        file_name: overrides
            .header_name
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADER_NAME.to_string()),
    });

    ResolvedSeries {
        name: name.to_string(),
        schema_version: config.project.schema_version,
        header,
        share_pin_lists: overrides.share_pin_lists.unwrap_or(true),
    }
}
