//! Per-chip source document (`chip.yaml`).

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use silicon_model::{DocEntry, Lifecycle, MemoryDevice, PadBinding, PadType};

/// A chip series as declared by its own `chip.yaml`.
///
/// Unknown top-level keys are tolerated so sources can park YAML anchors
/// (e.g. a pin list reused by several variants) under helper keys.
#[derive(Clone, Debug, Deserialize)]
pub struct ChipSource {
    /// Schema version the source is written against.
    pub schema_version: u32,
    /// Series identifier.
    pub model_id: String,
    /// Lifecycle state.
    pub lifecycle: Lifecycle,
    /// Documentation links.
    #[serde(default)]
    pub docs: Vec<DocEntry>,
    /// Family name of the shared multiplexing table, if any.
    #[serde(default)]
    pub shared_pinmux: Option<String>,
    /// Pad declarations, in declaration order.
    #[serde(default)]
    pub pads: IndexMap<String, PadDecl>,
    /// Variant declarations, in declaration order.
    #[serde(default)]
    pub variants: Vec<VariantDecl>,
}

/// Electrical data of one pad.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadDecl {
    /// Electrical type.
    #[serde(rename = "type")]
    pub pad_type: PadType,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// One orderable part as declared in the source.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDecl {
    /// Part number.
    pub part_number: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Package identifier.
    pub package: String,
    /// Package pin map.
    #[serde(default)]
    pub pins: Vec<PinDecl>,
    /// In-package memory devices.
    #[serde(default)]
    pub memory: Vec<MemoryDevice>,
}

/// One package pin as declared in the source.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinDecl {
    /// Pin identifier. Integers in the source are read as their decimal text.
    #[serde(deserialize_with = "pin_number")]
    pub number: String,
    /// Pad name, or a list of names for a multi-pad pin.
    pub pad: PadBinding,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

fn pin_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Unsigned(n) => n.to_string(),
        NumberOrText::Signed(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHIP: &str = r#"
schema_version: 1
model_id: SF32LB52x
lifecycle: production
docs:
  - datasheet: {en: "https://example.com/ds_en.pdf", zh: "https://example.com/ds_zh.pdf"}
shared_pinmux: SF32LB52x
qfn68_pins: &qfn68
  - {number: 1, pad: PA00}
  - {number: "2", pad: [VDD_1, VDD_2]}
pads:
  PA00:
    type: bidirectional
    description: "GPIO"
  VDD_1: {type: power_input}
  VDD_2: {type: power_input, notes: "bonded"}
variants:
  - part_number: SF32LB520U36
    description: "1MB flash"
    package: QFN68
    pins: *qfn68
    memory:
      - {mpi: MPI1, type: nor_flash, size: 1MB}
  - part_number: SF32LB523UB6
    package: QFN68
    pins: *qfn68
"#;

    #[test]
    fn parses_full_chip() {
        let chip: ChipSource = serde_yaml::from_str(CHIP).unwrap();
        assert_eq!(chip.model_id, "SF32LB52x");
        assert_eq!(chip.lifecycle, Lifecycle::Production);
        assert_eq!(chip.shared_pinmux.as_deref(), Some("SF32LB52x"));
        assert_eq!(chip.docs[0]["datasheet"]["zh"], "https://example.com/ds_zh.pdf");
        let names: Vec<_> = chip.pads.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["PA00", "VDD_1", "VDD_2"]);
        assert_eq!(chip.pads["VDD_2"].notes.as_deref(), Some("bonded"));
        assert_eq!(chip.variants.len(), 2);
        assert_eq!(chip.variants[0].memory[0].kind, "nor_flash");
    }

    #[test]
    fn aliases_expand_to_equal_pin_lists() {
        let chip: ChipSource = serde_yaml::from_str(CHIP).unwrap();
        assert_eq!(chip.variants[0].pins, chip.variants[1].pins);
    }

    #[test]
    fn pin_numbers_become_strings() {
        let chip: ChipSource = serde_yaml::from_str(CHIP).unwrap();
        let pins = &chip.variants[0].pins;
        assert_eq!(pins[0].number, "1");
        assert_eq!(pins[1].number, "2");
        assert_eq!(pins[1].pad.pads().len(), 2);
    }

    #[test]
    fn unknown_pad_field_rejected() {
        let src = "type: input\ndrive_strength: 4\n";
        assert!(serde_yaml::from_str::<PadDecl>(src).is_err());
    }

    #[test]
    fn unknown_pad_type_rejected() {
        assert!(serde_yaml::from_str::<PadDecl>("type: tristate\n").is_err());
    }
}
