//! Writing series artifacts.

use crate::error::BuildErrorKind;
use crate::pipeline::Artifacts;
use silicon_common::ContentHash;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the YAML document.
pub const YAML_FILE: &str = silicon_config::DOCUMENT_YAML_NAME;
/// File name of the JSON document.
pub const JSON_FILE: &str = silicon_config::DOCUMENT_JSON_NAME;

/// Writes a series' artifacts to `<output_dir>/<series>/`.
///
/// Every file is first written to a temporary sibling; the targets are
/// replaced only once all temporaries are complete. If replacing a target
/// fails, the targets replaced before it get their previous content back (or
/// are removed if they did not exist). Returns the written paths.
pub fn write_artifacts(
    output_dir: &Path,
    artifacts: &Artifacts,
) -> Result<Vec<PathBuf>, BuildErrorKind> {
    let dir = output_dir.join(&artifacts.series);
    std::fs::create_dir_all(&dir).map_err(|source| BuildErrorKind::Write {
        path: dir.clone(),
        source,
    })?;

    let mut files: Vec<(&str, &str)> = vec![
        (YAML_FILE, artifacts.yaml.as_str()),
        (JSON_FILE, artifacts.json.as_str()),
    ];
    if let Some(header) = &artifacts.header {
        files.push((header.file_name.as_str(), header.text.as_str()));
    }

    let mut staged = Vec::with_capacity(files.len());
    for (name, content) in files {
        let target = dir.join(name);
        let write_error = |source| BuildErrorKind::Write {
            path: target.clone(),
            source,
        };
        let temp = stage(&dir, content).map_err(write_error)?;
        let previous = previous_content(&target).map_err(write_error)?;
        staged.push((temp, target, previous, ContentHash::from_bytes(content.as_bytes())));
    }

    let mut replaced: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    for (temp, target, previous, hash) in staged {
        if let Err(e) = temp.persist(&target) {
            restore(&artifacts.series, &replaced);
            return Err(BuildErrorKind::Write {
                path: target,
                source: e.error,
            });
        }
        tracing::info!(
            series = %artifacts.series,
            path = %target.display(),
            %hash,
            "wrote artifact"
        );
        replaced.push((target, previous));
    }
    Ok(replaced.into_iter().map(|(target, _)| target).collect())
}

fn stage(dir: &Path, content: &str) -> io::Result<NamedTempFile> {
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    Ok(temp)
}

/// The current content of a target file; `None` if there is no file to keep.
fn previous_content(target: &Path) -> io::Result<Option<Vec<u8>>> {
    match std::fs::metadata(target) {
        Ok(meta) if meta.is_file() => std::fs::read(target).map(Some),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Puts replaced targets back, newest first. Failures are logged; the
/// original write error is what gets reported.
fn restore(series: &str, replaced: &[(PathBuf, Option<Vec<u8>>)]) {
    for (target, previous) in replaced.iter().rev() {
        let result = match previous {
            Some(bytes) => std::fs::write(target, bytes),
            None => std::fs::remove_file(target),
        };
        match result {
            Ok(()) => tracing::debug!(series, path = %target.display(), "restored artifact"),
            Err(error) => tracing::error!(
                series,
                path = %target.display(),
                %error,
                "could not restore artifact"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::HeaderArtifact;
    use silicon_model::{Lifecycle, SeriesDocument};

    fn document() -> SeriesDocument {
        SeriesDocument {
            schema_version: 1,
            model_id: "X".to_string(),
            lifecycle: Lifecycle::Preview,
            docs: Vec::new(),
            pads: Default::default(),
            variants: Vec::new(),
            pin_lists: Default::default(),
        }
    }

    fn artifacts(header: bool) -> Artifacts {
        Artifacts {
            series: "X".to_string(),
            document: document(),
            yaml: "schema_version: 1\n".to_string(),
            json: "{}\n".to_string(),
            header: header.then(|| HeaderArtifact {
                file_name: "x_pinmux.h".to_string(),
                text: "#pragma once\n".to_string(),
            }),
        }
    }

    #[test]
    fn writes_all_files() {
        let out = tempfile::tempdir().unwrap();
        let written = write_artifacts(out.path(), &artifacts(true)).unwrap();
        assert_eq!(written.len(), 3);
        let dir = out.path().join("X");
        assert_eq!(
            std::fs::read_to_string(dir.join(YAML_FILE)).unwrap(),
            "schema_version: 1\n"
        );
        assert_eq!(std::fs::read_to_string(dir.join(JSON_FILE)).unwrap(), "{}\n");
        assert!(dir.join("x_pinmux.h").is_file());
    }

    #[test]
    fn leaves_no_temporaries() {
        let out = tempfile::tempdir().unwrap();
        write_artifacts(out.path(), &artifacts(false)).unwrap();
        let names: Vec<_> = std::fs::read_dir(out.path().join("X"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&YAML_FILE.to_string()));
        assert!(names.contains(&JSON_FILE.to_string()));
    }

    #[test]
    fn failed_replace_restores_earlier_artifacts() {
        let out = tempfile::tempdir().unwrap();
        let dir = out.path().join("X");
        std::fs::create_dir_all(dir.join("x_pinmux.h").join("keep")).unwrap();
        std::fs::write(dir.join(YAML_FILE), "old: true\n").unwrap();

        let err = write_artifacts(out.path(), &artifacts(true)).unwrap_err();
        match err {
            BuildErrorKind::Write { path, .. } => assert!(path.ends_with("x_pinmux.h")),
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(
            std::fs::read_to_string(dir.join(YAML_FILE)).unwrap(),
            "old: true\n"
        );
        assert!(!dir.join(JSON_FILE).exists());
        let mut names: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec![YAML_FILE.to_string(), "x_pinmux.h".to_string()]);
    }

    #[test]
    fn overwrites_previous_output() {
        let out = tempfile::tempdir().unwrap();
        let dir = out.path().join("X");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(YAML_FILE), "stale").unwrap();
        write_artifacts(out.path(), &artifacts(false)).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.join(YAML_FILE)).unwrap(),
            "schema_version: 1\n"
        );
    }
}
