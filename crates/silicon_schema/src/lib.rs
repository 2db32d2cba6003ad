//! The schema gate for normalized series documents.
//!
//! A document is submitted as a `serde_json::Value` to a [`SchemaValidator`]
//! bound to one schema version. Validators report every violation they find
//! as a JSON pointer plus message; they never stop at the first one.
//! [`export`] renders the document shape as a JSON Schema document for
//! external tools, and [`BuiltinValidator`] evaluates that same schema.

#![warn(missing_docs)]

pub mod builtin;
pub mod export;
pub mod pointer;
pub mod shape;
pub mod validator;

pub use builtin::{BuiltinValidator, SCHEMA_VERSION};
pub use export::{export_schema, export_schema_for, export_schema_string, SCHEMA_FILE_NAME};
pub use pointer::JsonPointer;
pub use validator::{submit, SchemaValidator, SchemaViolation};
