//! Loading everything one series build reads.

use crate::codes::MISSING_SHARED_TABLE;
use crate::error::BuildErrorKind;
use silicon_config::PathsConfig;
use silicon_diagnostics::Diagnostic;
use silicon_pinmux::{MuxTable, RoutingRegistry};
use silicon_source::{
    load_chip, load_optional, ChipSource, MpiSource, PinmuxTableSource, RoutingSource, MPI_FILE,
    PINMUX_FILE, ROUTING_FILE,
};
use std::path::Path;

/// The loaded inputs of one series.
#[derive(Clone, Debug)]
pub struct SeriesSources {
    /// The chip's own declarations.
    pub chip: ChipSource,
    /// The shared multiplexing table, empty when the chip names none.
    pub table: MuxTable,
    /// The secondary-routing registry, empty when the family has none.
    pub registry: RoutingRegistry,
    /// The family's MPI table, when present.
    pub mpi: Option<MpiSource>,
}

/// Loads a chip source and the family files it refers to.
///
/// Returns the sources together with any warnings. A chip naming a shared
/// table that does not exist is built with an empty table (warning); missing
/// routing or MPI files are not reported.
pub fn load_series_sources(
    series: &str,
    chip_file: &Path,
    paths: &PathsConfig,
) -> Result<(SeriesSources, Vec<Diagnostic>), BuildErrorKind> {
    let chip = load_chip(chip_file)?;
    let mut warnings = Vec::new();

    let Some(family) = chip.shared_pinmux.clone() else {
        tracing::debug!(series, "no shared pinmux table");
        let sources = SeriesSources {
            chip,
            table: MuxTable::new(),
            registry: RoutingRegistry::new(),
            mpi: None,
        };
        return Ok((sources, warnings));
    };

    let family_dir = paths.pinmux.join(&family);
    let table_file = family_dir.join(PINMUX_FILE);
    let table = match load_optional::<PinmuxTableSource>(&table_file)? {
        Some(source) => MuxTable::from_source(source),
        None => {
            tracing::warn!(series, family = %family, "shared pinmux table not found");
            warnings.push(
                Diagnostic::warning(
                    MISSING_SHARED_TABLE,
                    format!("shared pinmux table `{family}` not found"),
                )
                .with_context("series", series)
                .with_note(format!("looked in {}", table_file.display()))
                .with_help("check `shared_pinmux` in chip.yaml"),
            );
            MuxTable::new()
        }
    };

    let registry = match load_optional::<RoutingSource>(&family_dir.join(ROUTING_FILE))? {
        Some(source) => RoutingRegistry::from_source(&source)?,
        None => RoutingRegistry::new(),
    };
    let mpi = load_optional::<MpiSource>(&paths.mpi.join(&family).join(MPI_FILE))?;

    tracing::debug!(
        series,
        family = %family,
        table_rows = table.len(),
        registers = registry.register_count(),
        peripherals = registry.peripheral_count(),
        mpi = mpi.is_some(),
        "loaded sources"
    );

    Ok((
        SeriesSources {
            chip,
            table,
            registry,
            mpi,
        },
        warnings,
    ))
}
