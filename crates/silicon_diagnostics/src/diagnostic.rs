//! Structured diagnostic messages with severity, codes, and build context.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// One `key: value` pair locating a diagnostic, e.g. `series: SF32LB52x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    /// What the value names (`series`, `pad`, `function`, `path`, ...).
    pub key: String,
    /// The name itself.
    pub value: String,
}

/// A structured diagnostic message.
///
/// Sources here are YAML documents rather than text spans, so a diagnostic is
/// located by an ordered list of context entries instead of a byte range.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The stable code identifying the kind of problem.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// Where the problem was found, outermost first.
    pub context: Vec<ContextEntry>,
    /// Explanatory footnotes.
    pub notes: Vec<String>,
    /// Actionable suggestions.
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Appends a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push(ContextEntry {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Returns the value of the first context entry with the given key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    #[test]
    fn create_error() {
        let code = DiagnosticCode::new(Category::Error, 201);
        let diag = Diagnostic::error(code, "unknown peripheral 'SPI3'");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "unknown peripheral 'SPI3'");
        assert_eq!(format!("{}", diag.code), "E201");
    }

    #[test]
    fn create_warning() {
        let code = DiagnosticCode::new(Category::Warning, 101);
        let diag = Diagnostic::warning(code, "shared pinmux table not found");
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn builder_methods() {
        let code = DiagnosticCode::new(Category::Error, 301);
        let diag = Diagnostic::error(code, "unknown pad reference")
            .with_context("series", "SF32LB52x")
            .with_context("variant", "SF32LB520U36")
            .with_note("pin 12 refers to pad PA99")
            .with_help("declare the pad under `pads:` in chip.yaml");
        assert_eq!(diag.context.len(), 2);
        assert_eq!(diag.context_value("series"), Some("SF32LB52x"));
        assert_eq!(diag.context_value("pad"), None);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }
}
