//! Re-validating previously written series documents.

use crate::codes::{to_diagnostics, SOURCE_PARSE};
use crate::discover::discover_series;
use crate::error::{BuildError, BuildErrorKind};
use crate::output::YAML_FILE;
use rayon::prelude::*;
use serde::Deserialize;
use silicon_config::{PathsConfig, ProjectConfig};
use silicon_diagnostics::{Diagnostic, DiagnosticSink};
use silicon_merge::check_sip_memory;
use silicon_model::MemoryDevice;
use silicon_schema::{BuiltinValidator, SchemaValidator};
use silicon_source::{load_optional, MpiSource, SourceError, CHIP_FILE, MPI_FILE};
use std::fmt;
use std::path::Path;

/// Outcome counts of a validation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidateSummary {
    /// Documents that passed.
    pub valid: usize,
    /// Documents with violations or parse errors.
    pub invalid: usize,
    /// Output directories without a document.
    pub skipped: usize,
}

impl ValidateSummary {
    /// Returns `true` if every document passed.
    pub fn is_success(&self) -> bool {
        self.invalid == 0
    }
}

impl fmt::Display for ValidateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} valid, {} invalid, {} skipped",
            self.valid, self.invalid, self.skipped
        )
    }
}

enum Verdict {
    Valid,
    Invalid,
    Skipped,
}

/// Validates `<output>/<series>/series.yaml` for the selected series (all
/// output directories when `selection` is empty).
///
/// A document that passes the schema also has its memory devices checked
/// against the family's current `mpi.yaml`, found through the series'
/// `chip.yaml`.
pub fn validate_outputs(
    root: &Path,
    config: &ProjectConfig,
    selection: &[String],
    sink: &DiagnosticSink,
) -> std::io::Result<ValidateSummary> {
    let paths = config.paths.rooted_at(root);
    let mut dirs = discover_series(&paths.output)?;
    if !selection.is_empty() {
        dirs.retain(|d| selection.contains(&d.name));
    }
    let validator = BuiltinValidator::new(config.project.schema_version);

    let verdicts: Vec<Verdict> = dirs
        .par_iter()
        .map(|dir| validate_one(&dir.name, &dir.path.join(YAML_FILE), &validator, &paths, sink))
        .collect();

    let mut summary = ValidateSummary::default();
    for verdict in verdicts {
        match verdict {
            Verdict::Valid => summary.valid += 1,
            Verdict::Invalid => summary.invalid += 1,
            Verdict::Skipped => summary.skipped += 1,
        }
    }
    Ok(summary)
}

fn validate_one(
    series: &str,
    path: &Path,
    validator: &dyn SchemaValidator,
    paths: &PathsConfig,
    sink: &DiagnosticSink,
) -> Verdict {
    let Ok(text) = std::fs::read_to_string(path) else {
        tracing::debug!(series, "no series.yaml, skipping");
        return Verdict::Skipped;
    };
    let document: serde_json::Value = match serde_yaml::from_str(&text) {
        Ok(document) => document,
        Err(e) => {
            let err = SourceError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            };
            sink.emit(
                Diagnostic::error(SOURCE_PARSE, err.to_string())
                    .with_context("series", series)
                    .with_context("file", path.display().to_string()),
            );
            return Verdict::Invalid;
        }
    };

    let violations = validator.validate(&document);
    if !violations.is_empty() {
        let err = BuildError::new(series, BuildErrorKind::SchemaValidationFailed(violations));
        sink.emit_all(to_diagnostics(&err));
        return Verdict::Invalid;
    }
    if let Err(err) = recheck_memory(series, path, &document, paths) {
        sink.emit_all(to_diagnostics(&err));
        return Verdict::Invalid;
    }
    tracing::info!(series, "valid");
    Verdict::Valid
}

/// The one `chip.yaml` key validation needs.
#[derive(Deserialize)]
struct FamilyRef {
    #[serde(default)]
    shared_pinmux: Option<String>,
}

#[derive(Deserialize)]
struct VariantMemory {
    part_number: String,
    #[serde(default)]
    memory: Vec<MemoryDevice>,
}

#[derive(Deserialize)]
struct DocumentMemory {
    variants: Vec<VariantMemory>,
}

/// Re-runs the SiP memory check of the merge on a schema-valid document.
/// Skipped when the chip source, its family or the family's `mpi.yaml` is
/// gone.
fn recheck_memory(
    series: &str,
    path: &Path,
    document: &serde_json::Value,
    paths: &PathsConfig,
) -> Result<(), BuildError> {
    let chip_file = paths.chips.join(series).join(CHIP_FILE);
    let family = load_optional::<FamilyRef>(&chip_file)
        .map_err(|e| BuildError::new(series, e))?
        .and_then(|chip| chip.shared_pinmux);
    let Some(family) = family else {
        tracing::debug!(series, "no shared family, memory not rechecked");
        return Ok(());
    };
    let Some(mpi) = load_optional::<MpiSource>(&paths.mpi.join(&family).join(MPI_FILE))
        .map_err(|e| BuildError::new(series, e))?
    else {
        tracing::debug!(series, family = %family, "no mpi.yaml, memory not rechecked");
        return Ok(());
    };

    let memory = DocumentMemory::deserialize(document).map_err(|e| {
        BuildError::new(
            series,
            SourceError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        )
    })?;
    for variant in &memory.variants {
        check_sip_memory(&variant.part_number, &variant.memory, &mpi)
            .map_err(|e| BuildError::new(series, e))?;
    }
    Ok(())
}
