//! Diagnostic severity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a diagnostic is. Only [`Severity::Error`] fails a series.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Extra context attached to a build.
    Note,
    /// A source issue that was tolerated; the series still builds.
    Warning,
    /// A problem that fails the series build.
    Error,
}

impl Severity {
    /// The lowercase label used by renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns `true` if a diagnostic of this severity fails its series.
    pub fn fails_build(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
