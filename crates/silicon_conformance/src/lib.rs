//! Conformance test helpers for the silicon pipeline.
//!
//! Provides in-memory helpers that run one series from inline YAML through
//! every stage, an on-disk [`Project`] fixture for whole-project builds, and
//! a decoder for emitted header constants.

#![warn(missing_docs)]

use silicon_build::{build_project, build_series, Artifacts, BuildError, BuildSummary, SeriesSources};
use silicon_config::{load_config_from_str, HeaderSettings, ResolvedSeries};
use silicon_diagnostics::{Diagnostic, DiagnosticSink};
use silicon_pinmux::{MuxTable, RoutingRegistry};
use silicon_schema::BuiltinValidator;
use silicon_source::{parse_yaml, ChipSource, MpiSource, PinmuxTableSource, RoutingSource};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Inline source documents of one series.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeriesFixture<'a> {
    /// `chip.yaml` text.
    pub chip: &'a str,
    /// Shared multiplexing table text.
    pub pinmux: Option<&'a str>,
    /// Secondary-routing registry text.
    pub routing: Option<&'a str>,
    /// MPI table text.
    pub mpi: Option<&'a str>,
}

impl<'a> SeriesFixture<'a> {
    /// A fixture with a chip source and a multiplexing table.
    pub fn new(chip: &'a str, pinmux: &'a str) -> Self {
        Self {
            chip,
            pinmux: Some(pinmux),
            ..Self::default()
        }
    }

    /// Adds a routing registry.
    pub fn with_routing(mut self, routing: &'a str) -> Self {
        self.routing = Some(routing);
        self
    }

    /// Adds an MPI table.
    pub fn with_mpi(mut self, mpi: &'a str) -> Self {
        self.mpi = Some(mpi);
        self
    }

    /// Parses the fixture into loaded sources.
    ///
    /// Panics on malformed fixture YAML or an invalid registry.
    pub fn sources(&self) -> SeriesSources {
        let chip: ChipSource = parse_yaml(self.chip, Path::new("chip.yaml")).unwrap();
        let table = match self.pinmux {
            Some(text) => MuxTable::from_source(
                parse_yaml::<PinmuxTableSource>(text, Path::new("pinmux.yaml")).unwrap(),
            ),
            None => MuxTable::new(),
        };
        let registry = match self.routing {
            Some(text) => {
                let source: RoutingSource = parse_yaml(text, Path::new("routing.yaml")).unwrap();
                RoutingRegistry::from_source(&source).unwrap()
            }
            None => RoutingRegistry::new(),
        };
        let mpi = self
            .mpi
            .map(|text| parse_yaml::<MpiSource>(text, Path::new("mpi.yaml")).unwrap());
        SeriesSources {
            chip,
            table,
            registry,
            mpi,
        }
    }
}

/// Series settings with the header capability and pin-list sharing chosen.
pub fn settings(name: &str, header: bool, share_pin_lists: bool) -> ResolvedSeries {
    ResolvedSeries {
        name: name.to_string(),
        schema_version: silicon_schema::SCHEMA_VERSION,
        header: header.then(|| HeaderSettings {
            file_name: "pinmux.h".to_string(),
        }),
        share_pin_lists,
    }
}

/// Runs every stage of one series with a header and shared pin lists.
pub fn run_series(fixture: &SeriesFixture<'_>) -> Result<Artifacts, BuildError> {
    run_series_with(fixture, &settings("conformance", true, true))
}

/// Runs every stage of one series with explicit settings.
pub fn run_series_with(
    fixture: &SeriesFixture<'_>,
    settings: &ResolvedSeries,
) -> Result<Artifacts, BuildError> {
    let validator = BuiltinValidator::new(settings.schema_version);
    build_series(settings, &fixture.sources(), &validator)
}

/// One `#define` line of an emitted header, decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedConstant {
    /// Constant name.
    pub name: String,
    /// Port letter.
    pub port: char,
    /// Pin index within the port.
    pub pin: u8,
    /// Multiplexer select code.
    pub select: u32,
    /// Routing register offset.
    pub offset: u32,
    /// Low bit of the routing field.
    pub field_position: u32,
}

/// Decodes a `#define NAME PINMUX(port, pin, sel, off, pos)` line.
pub fn decode_constant(line: &str) -> Option<DecodedConstant> {
    let rest = line.strip_prefix("#define ")?;
    let (name, call) = rest.split_once(' ')?;
    let args = call.strip_prefix("PINMUX(")?.strip_suffix(')')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let [port, pin, select, offset, position] = parts.as_slice() else {
        return None;
    };
    let mut port_chars = port.chars();
    let port = port_chars.next()?;
    if port_chars.next().is_some() {
        return None;
    }
    Some(DecodedConstant {
        name: name.to_string(),
        port,
        pin: pin.parse().ok()?,
        select: select.parse().ok()?,
        offset: u32::from_str_radix(offset.strip_prefix("0x")?, 16).ok()?,
        field_position: position.parse().ok()?,
    })
}

/// Decodes every constant of a header text.
pub fn decode_header(text: &str) -> Vec<DecodedConstant> {
    text.lines()
        .filter(|l| l.contains("PINMUX(") && !l.contains("PINMUX(port"))
        .filter_map(decode_constant)
        .collect()
}

/// A project laid out on disk in a temporary directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Creates a project with the given `silicon.toml` text.
    pub fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };
        project.write("silicon.toml", config);
        project
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the root, creating parent directories.
    pub fn write(&self, relative: &str, text: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    /// Writes a series fixture in the default layout, using `family` for the
    /// shared table directories.
    pub fn add_series(&self, series: &str, family: &str, fixture: &SeriesFixture<'_>) {
        self.write(&format!("chips/{series}/chip.yaml"), fixture.chip);
        if let Some(text) = fixture.pinmux {
            self.write(&format!("common/pinmux/{family}/pinmux.yaml"), text);
        }
        if let Some(text) = fixture.routing {
            self.write(&format!("common/pinmux/{family}/routing.yaml"), text);
        }
        if let Some(text) = fixture.mpi {
            self.write(&format!("common/mpi/{family}/mpi.yaml"), text);
        }
    }

    /// Path of a series artifact.
    pub fn artifact(&self, series: &str, file: &str) -> PathBuf {
        self.root().join("out").join(series).join(file)
    }

    /// Reads a series artifact.
    pub fn read_artifact(&self, series: &str, file: &str) -> String {
        fs::read_to_string(self.artifact(series, file)).unwrap()
    }

    /// Builds the project and returns the summary and every diagnostic.
    pub fn build(&self, selection: &[&str]) -> (BuildSummary, Vec<Diagnostic>) {
        let text = fs::read_to_string(self.root().join("silicon.toml")).unwrap();
        let config = load_config_from_str(&text).unwrap();
        let selection: Vec<String> = selection.iter().map(|s| s.to_string()).collect();
        let sink = DiagnosticSink::new();
        let summary = build_project(self.root(), &config, &selection, &sink).unwrap();
        (summary, sink.take_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_constant_line() {
        let c = decode_constant("#define PA00_USART1_TXD PINMUX(A, 0, 4, 0x058, 0)").unwrap();
        assert_eq!(c.name, "PA00_USART1_TXD");
        assert_eq!(c.port, 'A');
        assert_eq!((c.pin, c.select, c.offset, c.field_position), (0, 4, 0x58, 0));
    }

    #[test]
    fn rejects_other_lines() {
        assert!(decode_constant("#define PINMUX_PORT_A 0u").is_none());
        assert!(decode_constant("/* PA00 */").is_none());
    }
}
