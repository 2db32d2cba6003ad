//! The validator interface of the schema gate.

use silicon_model::SeriesDocument;
use std::fmt;

/// One schema violation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value; empty for the document root.
    pub pointer: String,
    /// What is wrong with it.
    pub message: String,
}

impl SchemaViolation {
    /// Creates a violation.
    pub fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer = if self.pointer.is_empty() {
            "(root)"
        } else {
            &self.pointer
        };
        write!(f, "{pointer}: {}", self.message)
    }
}

/// A validator bound to one schema version.
pub trait SchemaValidator: Send + Sync {
    /// The schema version this validator checks against.
    fn schema_version(&self) -> u32;

    /// Validates a document, returning every violation found.
    fn validate(&self, document: &serde_json::Value) -> Vec<SchemaViolation>;
}

/// Submits a series document to a validator as structured data.
pub fn submit(
    validator: &dyn SchemaValidator,
    document: &SeriesDocument,
) -> Result<(), Vec<SchemaViolation>> {
    let violations = validator.validate(&document.to_json_value());
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
