//! The normalized series document.

use crate::pad::Pad;
use crate::types::{DocEntry, Lifecycle};
use crate::variant::{MemoryDevice, Pin, PinList, PinListId, Variant};
use indexmap::IndexMap;
use serde::ser::Serializer;
use serde::Serialize;
use silicon_common::{Arena, ArenaId};

/// The fully resolved description of one chip series.
///
/// Pin lists are stored once in [`pin_lists`](Self::pin_lists) and referenced
/// from variants by handle. Whether two variants share a handle is a storage
/// detail: serialization always writes each variant's pins in full, so a
/// shared and an unshared document with the same content serialize equally.
#[derive(Clone, Debug)]
pub struct SeriesDocument {
    /// Schema version the document conforms to.
    pub schema_version: u32,
    /// Series identifier, e.g. `SF32LB52x`.
    pub model_id: String,
    /// Lifecycle state of the series.
    pub lifecycle: Lifecycle,
    /// Documentation links.
    pub docs: Vec<DocEntry>,
    /// Pads by name, in declaration order.
    pub pads: IndexMap<String, Pad>,
    /// Variants, in declaration order.
    pub variants: Vec<Variant>,
    /// Pin-list storage referenced by [`Variant::pins`].
    pub pin_lists: Arena<PinListId, PinList>,
}

impl SeriesDocument {
    /// Looks up a pad by name.
    pub fn pad(&self, name: &str) -> Option<&Pad> {
        self.pads.get(name)
    }

    /// Looks up a variant by part number.
    pub fn variant(&self, part_number: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.part_number == part_number)
    }

    /// Returns the pin list of a variant of this document.
    pub fn pins_of(&self, variant: &Variant) -> &[Pin] {
        &self.pin_lists[variant.pins]
    }

    /// Number of variants referring to each pin list, indexed by raw handle.
    pub fn pin_list_users(&self) -> Vec<usize> {
        let mut users = vec![0; self.pin_lists.len()];
        for variant in &self.variants {
            if let Some(slot) = users.get_mut(variant.pins.as_raw() as usize) {
                *slot += 1;
            }
        }
        users
    }

    /// Returns the document as a JSON value, the form handed to validators.
    pub fn to_json_value(&self) -> serde_json::Value {
        // Every field is a string, integer, or map keyed by strings.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Pretty-printed JSON rendering with a trailing newline.
    pub fn to_json_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(self).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[derive(Serialize)]
struct DocumentView<'a> {
    schema_version: u32,
    model_id: &'a str,
    lifecycle: Lifecycle,
    docs: &'a [DocEntry],
    pads: &'a IndexMap<String, Pad>,
    variants: Vec<VariantView<'a>>,
}

#[derive(Serialize)]
struct VariantView<'a> {
    part_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    package: &'a str,
    pins: &'a [Pin],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    memory: &'a [MemoryDevice],
}

impl Serialize for SeriesDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentView {
            schema_version: self.schema_version,
            model_id: &self.model_id,
            lifecycle: self.lifecycle,
            docs: &self.docs,
            pads: &self.pads,
            variants: self
                .variants
                .iter()
                .map(|v| VariantView {
                    part_number: &v.part_number,
                    description: v.description.as_deref(),
                    package: &v.package,
                    pins: self.pins_of(v),
                    memory: &v.memory,
                })
                .collect(),
        }
        .serialize(serializer)
    }
}
