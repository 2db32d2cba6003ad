//! Building every series of a project.

use crate::codes::{to_diagnostics, MISSING_CHIP_SOURCE, UNKNOWN_SERIES};
use crate::discover::{discover_series, SeriesDir};
use crate::error::BuildError;
use crate::output::write_artifacts;
use crate::pipeline::build_series;
use crate::sources::load_series_sources;
use rayon::prelude::*;
use silicon_config::{resolve_series, PathsConfig, ProjectConfig};
use silicon_diagnostics::{Diagnostic, DiagnosticSink};
use silicon_schema::BuiltinValidator;
use std::fmt;
use std::path::Path;

/// Outcome counts of a project build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Series whose artifacts were written.
    pub built: Vec<String>,
    /// Series that failed at some stage.
    pub failed: Vec<String>,
    /// Directories without a chip source.
    pub skipped: Vec<String>,
}

impl BuildSummary {
    /// Returns `true` if no series failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} built, {} failed, {} skipped",
            self.built.len(),
            self.failed.len(),
            self.skipped.len()
        )
    }
}

enum Outcome {
    Built,
    Failed,
    Skipped,
}

/// Builds the selected series of a project (all of them when `selection` is
/// empty), in parallel. Diagnostics go to `sink`; the returned summary says
/// which series ended where.
pub fn build_project(
    root: &Path,
    config: &ProjectConfig,
    selection: &[String],
    sink: &DiagnosticSink,
) -> std::io::Result<BuildSummary> {
    let paths = config.paths.rooted_at(root);
    let mut summary = BuildSummary::default();

    let mut dirs = discover_series(&paths.chips)?;
    if !selection.is_empty() {
        for name in selection {
            if !dirs.iter().any(|d| &d.name == name) {
                sink.emit(
                    Diagnostic::error(UNKNOWN_SERIES, format!("no chip directory for series `{name}`"))
                        .with_context("series", name.as_str())
                        .with_note(format!("looked in {}", paths.chips.display())),
                );
                summary.failed.push(name.clone());
            }
        }
        dirs.retain(|d| selection.contains(&d.name));
    }
    tracing::info!(series = dirs.len(), chips = %paths.chips.display(), "building");

    let outcomes: Vec<(String, Outcome)> = dirs
        .par_iter()
        .map(|dir| (dir.name.clone(), build_one(dir, config, &paths, sink)))
        .collect();

    for (name, outcome) in outcomes {
        match outcome {
            Outcome::Built => summary.built.push(name),
            Outcome::Failed => summary.failed.push(name),
            Outcome::Skipped => summary.skipped.push(name),
        }
    }
    Ok(summary)
}

fn build_one(
    dir: &SeriesDir,
    config: &ProjectConfig,
    paths: &PathsConfig,
    sink: &DiagnosticSink,
) -> Outcome {
    let series = dir.name.as_str();
    if !dir.has_chip_file() {
        tracing::warn!(series, "no chip.yaml, skipping");
        sink.emit(
            Diagnostic::warning(MISSING_CHIP_SOURCE, "no chip.yaml found, series skipped")
                .with_context("series", series),
        );
        return Outcome::Skipped;
    }

    let settings = resolve_series(config, series);
    let validator = BuiltinValidator::new(settings.schema_version);

    let result = load_series_sources(series, &dir.chip_file(), paths)
        .map_err(|kind| BuildError::new(series, kind))
        .and_then(|(sources, warnings)| {
            sink.emit_all(warnings);
            build_series(&settings, &sources, &validator)
        })
        .and_then(|artifacts| {
            write_artifacts(&paths.output, &artifacts).map_err(|kind| BuildError::new(series, kind))
        });

    match result {
        Ok(written) => {
            tracing::info!(series, files = written.len(), "built series");
            Outcome::Built
        }
        Err(err) => {
            tracing::debug!(series, error = %err, "series failed");
            sink.emit_all(to_diagnostics(&err));
            Outcome::Failed
        }
    }
}
