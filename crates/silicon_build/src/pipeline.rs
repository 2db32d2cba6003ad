//! The per-series pipeline: expand → merge → validate → encode → render.

use crate::error::{BuildError, BuildErrorKind};
use crate::sources::SeriesSources;
use silicon_codegen::{emit_header, resolve_encodings};
use silicon_config::ResolvedSeries;
use silicon_merge::{merge_chip, MergeOptions};
use silicon_model::{write_yaml, SeriesDocument};
use silicon_pinmux::expand_pads;
use silicon_schema::{submit, SchemaValidator};

/// A rendered header and the file name it is written under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderArtifact {
    /// File name inside the series output directory.
    pub file_name: String,
    /// Header text.
    pub text: String,
}

/// Everything a successful series build produces, not yet written.
#[derive(Clone, Debug)]
pub struct Artifacts {
    /// Series name (output directory name).
    pub series: String,
    /// The merged document.
    pub document: SeriesDocument,
    /// YAML rendering of the document.
    pub yaml: String,
    /// JSON rendering of the document.
    pub json: String,
    /// The header, for series that emit one.
    pub header: Option<HeaderArtifact>,
}

/// Runs every stage for one series. Touches no files.
///
/// Stage errors abort immediately. Schema validation reports every
/// violation at once.
pub fn build_series(
    settings: &ResolvedSeries,
    sources: &SeriesSources,
    validator: &dyn SchemaValidator,
) -> Result<Artifacts, BuildError> {
    let series = settings.name.as_str();
    let fail = |kind: BuildErrorKind| BuildError::new(series, kind);

    let chip = &sources.chip;
    let functions = expand_pads(
        chip.pads.keys().map(String::as_str),
        &sources.table,
        &sources.registry,
    )
    .map_err(|e| fail(e.into()))?;
    tracing::debug!(series, pads = functions.len(), "expanded functions");

    let options = MergeOptions {
        share_pin_lists: settings.share_pin_lists,
    };
    let document = merge_chip(chip, &functions, sources.mpi.as_ref(), &options)
        .map_err(|e| fail(e.into()))?;

    submit(validator, &document)
        .map_err(|violations| fail(BuildErrorKind::SchemaValidationFailed(violations)))?;
    tracing::debug!(series, version = validator.schema_version(), "schema gate passed");

    let header = match &settings.header {
        Some(header) => {
            let encodings =
                resolve_encodings(&document, &sources.registry).map_err(|e| fail(e.into()))?;
            let text = emit_header(&document, &encodings).render();
            Some(HeaderArtifact {
                file_name: header.file_name.clone(),
                text,
            })
        }
        None => {
            tracing::debug!(series, "no header requested");
            None
        }
    };

    Ok(Artifacts {
        series: series.to_string(),
        yaml: write_yaml(&document),
        json: document.to_json_string(),
        document,
        header,
    })
}
