//! YAML loading of source documents.

use crate::chip::ChipSource;
use crate::error::SourceError;
use crate::mpi::MpiSource;
use crate::pinmux::PinmuxTableSource;
use crate::routing::RoutingSource;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;

/// File name of a chip source inside its series directory.
pub const CHIP_FILE: &str = "chip.yaml";
/// File name of the shared multiplexing table inside a family directory.
pub const PINMUX_FILE: &str = "pinmux.yaml";
/// File name of the secondary-routing registry inside a family directory.
pub const ROUTING_FILE: &str = "routing.yaml";
/// File name of the MPI table inside a family directory.
pub const MPI_FILE: &str = "mpi.yaml";

/// Parses YAML text; `origin` is only used for error reporting.
pub fn parse_yaml<T: DeserializeOwned>(content: &str, origin: &Path) -> Result<T, SourceError> {
    serde_yaml::from_str(content).map_err(|e| SourceError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_yaml(&content, path)
}

/// Loads a document that may legitimately be absent.
///
/// Returns `Ok(None)` when the file does not exist; any other failure,
/// including a parse error, is reported.
pub fn load_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SourceError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_yaml(&content, path).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SourceError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a `chip.yaml`.
pub fn load_chip(path: &Path) -> Result<ChipSource, SourceError> {
    load_yaml(path)
}

/// Loads a shared multiplexing table.
pub fn load_pinmux_table(path: &Path) -> Result<PinmuxTableSource, SourceError> {
    load_yaml(path)
}

/// Loads a secondary-routing registry.
pub fn load_routing(path: &Path) -> Result<RoutingSource, SourceError> {
    load_yaml(path)
}

/// Loads an MPI table.
pub fn load_mpi(path: &Path) -> Result<MpiSource, SourceError> {
    load_yaml(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_chip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHIP_FILE);
        fs::write(
            &path,
            "schema_version: 1\nmodel_id: X\nlifecycle: preview\npads:\n  PA00: {type: input}\n",
        )
        .unwrap();
        let chip = load_chip(&path).unwrap();
        assert_eq!(chip.model_id, "X");
        assert!(chip.variants.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_pinmux_table(&dir.path().join(PINMUX_FILE)).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn optional_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<RoutingSource> = load_optional(&dir.path().join(ROUTING_FILE)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn optional_present_but_broken_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MPI_FILE);
        fs::write(&path, "mpis: [not, a, map]\n").unwrap();
        let err = load_optional::<MpiSource>(&path).unwrap_err();
        match err {
            SourceError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_error_names_origin() {
        let err = parse_yaml::<ChipSource>("model_id: [", Path::new("chip.yaml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse chip.yaml:"));
    }
}
