//! JSON Schema export.

use crate::builtin::SCHEMA_VERSION;
use crate::shape::SeriesShape;
use schemars::schema::{InstanceType, RootSchema, Schema, SchemaObject};
use schemars::schema_for;

/// File name the exported schema is written under.
pub const SCHEMA_FILE_NAME: &str = "chip-series.schema.json";

/// The JSON Schema of a current-version series document.
pub fn export_schema() -> RootSchema {
    export_schema_for(SCHEMA_VERSION)
}

/// The JSON Schema of a series document, with `schema_version` pinned to
/// `version`.
pub fn export_schema_for(version: u32) -> RootSchema {
    let mut root = schema_for!(SeriesShape);
    let field = root
        .schema
        .object
        .as_mut()
        .and_then(|object| object.properties.get_mut("schema_version"));
    if let Some(Schema::Object(field)) = field {
        *field = SchemaObject {
            metadata: field.metadata.take(),
            instance_type: Some(InstanceType::Integer.into()),
            const_value: Some(version.into()),
            ..Default::default()
        };
    }
    root
}

/// The exported schema, pretty-printed with a trailing newline.
pub fn export_schema_string() -> String {
    let mut out = serde_json::to_string_pretty(&export_schema()).unwrap_or_default();
    out.push('\n');
    out
}
