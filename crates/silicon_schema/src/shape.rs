//! The document shape as JSON Schema types.
//!
//! These mirror the serialized form of `SeriesDocument`, where every variant
//! carries its pins inline. They exist only to derive the exported schema,
//! which is also what the built-in validator evaluates.

use indexmap::IndexMap;
use schemars::JsonSchema;
use silicon_model::{DocEntry, Function, Lifecycle, MemoryDevice, PadType, Pin};

/// A normalized chip series document.
#[derive(JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SeriesShape {
    /// Schema version the document conforms to.
    pub schema_version: u32,
    /// Series identifier.
    #[schemars(length(min = 1))]
    pub model_id: String,
    /// Lifecycle state of the series.
    pub lifecycle: Lifecycle,
    /// Documentation links: kind → locale → URL.
    pub docs: Vec<DocEntry>,
    /// Pads by name, in declaration order.
    pub pads: IndexMap<String, PadShape>,
    /// Orderable parts.
    pub variants: Vec<VariantShape>,
}

/// A wafer-level pad. The function list is always written, even when empty.
#[derive(JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PadShape {
    /// Electrical type.
    #[serde(rename = "type")]
    pub pad_type: PadType,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Selectable functions.
    pub functions: Vec<Function>,
}

/// One orderable part with its package pin map.
#[derive(JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VariantShape {
    /// Unique part number.
    #[schemars(length(min = 1))]
    pub part_number: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Package identifier.
    #[schemars(length(min = 1))]
    pub package: String,
    /// Package pins.
    pub pins: Vec<Pin>,
    /// In-package memory devices.
    #[serde(default)]
    pub memory: Vec<MemoryDevice>,
}
