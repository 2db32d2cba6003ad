//! Variants (orderable part numbers) and their package pin maps.

use schemars::gen::SchemaGenerator;
use schemars::schema::{
    ArrayValidation, InstanceType, Metadata, Schema, SchemaObject, SingleOrVec,
    StringValidation, SubschemaValidation,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use silicon_common::define_id;

define_id!(
    /// Handle of a pin list in [`SeriesDocument::pin_lists`](crate::SeriesDocument).
    PinListId
);

/// The pad(s) bonded to one package pin.
///
/// Almost every pin bonds to exactly one pad. Some special packages bond two
/// or more pads to one physical pin; that case is kept explicit rather than
/// being folded into several pins, because whether the pads form one
/// electrical node is package-specific.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PadBinding {
    /// One pad on this pin.
    Single(String),
    /// Several pads bonded together to this pin.
    Bonded(Vec<String>),
}

impl PadBinding {
    /// All pad names bound to the pin, in declaration order.
    pub fn pads(&self) -> &[String] {
        match self {
            PadBinding::Single(name) => std::slice::from_ref(name),
            PadBinding::Bonded(names) => names,
        }
    }
}

fn pad_name_schema() -> SchemaObject {
    SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        string: Some(Box::new(StringValidation {
            min_length: Some(1),
            ..Default::default()
        })),
        ..Default::default()
    }
}

// Written by hand: an empty name or an empty bonded list is never a binding.
impl JsonSchema for PadBinding {
    fn schema_name() -> String {
        "PadBinding".to_string()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        let bonded = SchemaObject {
            instance_type: Some(InstanceType::Array.into()),
            array: Some(Box::new(ArrayValidation {
                items: Some(SingleOrVec::Single(Box::new(pad_name_schema().into()))),
                min_items: Some(1),
                ..Default::default()
            })),
            ..Default::default()
        };
        SchemaObject {
            metadata: Some(Box::new(Metadata {
                description: Some("A pad name, or the names of several bonded pads.".to_string()),
                ..Default::default()
            })),
            subschemas: Some(Box::new(SubschemaValidation {
                any_of: Some(vec![pad_name_schema().into(), bonded.into()]),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

/// One package pin.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Pin {
    /// Package pin identifier. Always a string, BGA balls are alphanumeric.
    #[schemars(length(min = 1))]
    pub number: String,
    /// The bonded pad(s), by name, resolved against the series pad set.
    pub pad: PadBinding,
}

impl Pin {
    /// A pin bonded to a single pad.
    pub fn new(number: impl Into<String>, pad: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            pad: PadBinding::Single(pad.into()),
        }
    }
}

/// An ordered package pin map. Compared structurally.
pub type PinList = Vec<Pin>;

/// A memory device packaged with a variant (SiP flash or PSRAM).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MemoryDevice {
    /// The memory interface (MPI) the device is attached to.
    #[schemars(length(min = 1))]
    pub mpi: String,
    /// Device kind, e.g. `nor_flash`, `psram`.
    #[serde(rename = "type")]
    #[schemars(length(min = 1))]
    pub kind: String,
    /// Capacity as written in the source, e.g. `4MB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1))]
    pub size: Option<String>,
}

/// One orderable part of a series.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Variant {
    /// Unique part number.
    pub part_number: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Package identifier, e.g. `QFN68`.
    pub package: String,
    /// Handle of this variant's pin list.
    pub pins: PinListId,
    /// In-package memory devices.
    pub memory: Vec<MemoryDevice>,
}
