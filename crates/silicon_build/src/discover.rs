//! Discovery of series directories.

use silicon_source::CHIP_FILE;
use std::path::{Path, PathBuf};

/// One sub-directory of the chips directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesDir {
    /// Directory name, used as the series name.
    pub name: String,
    /// Directory path.
    pub path: PathBuf,
}

impl SeriesDir {
    /// Path of the chip source inside the directory.
    pub fn chip_file(&self) -> PathBuf {
        self.path.join(CHIP_FILE)
    }

    /// Returns `true` if the directory holds a chip source.
    pub fn has_chip_file(&self) -> bool {
        self.chip_file().is_file()
    }
}

/// Lists the series directories under `chips_dir`, sorted by name.
///
/// Hidden directories and plain files are ignored.
pub fn discover_series(chips_dir: &Path) -> std::io::Result<Vec<SeriesDir>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(chips_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        dirs.push(SeriesDir {
            name,
            path: entry.path(),
        });
    }
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}
