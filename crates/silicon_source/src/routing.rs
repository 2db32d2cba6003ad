//! The secondary-routing registry (`routing.yaml`).

use indexmap::IndexMap;
use serde::{de, Deserialize, Deserializer};
use std::fmt;

/// Routing registers and peripheral templates of one chip family.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RoutingSource {
    /// PINR registers, one per peripheral instance.
    #[serde(default)]
    pub registers: Vec<RegisterDecl>,
    /// Peripheral templates referenced by templated multiplexing entries.
    #[serde(default)]
    pub peripherals: Vec<PeripheralDecl>,
}

/// A routing register.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterDecl {
    /// Register name, `<INSTANCE>_PINR`.
    pub name: String,
    /// Byte offset. Integers or `0x…` strings.
    #[serde(deserialize_with = "register_offset")]
    pub offset: u32,
    /// Signal → bit-field.
    #[serde(default)]
    pub fields: IndexMap<String, BitRange>,
}

/// An inclusive bit range written `[hi, lo]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(from = "[u32; 2]")]
pub struct BitRange {
    /// Most significant bit.
    pub hi: u32,
    /// Least significant bit.
    pub lo: u32,
}

impl BitRange {
    /// Builds a range from its `[hi, lo]` pair.
    pub fn new(hi: u32, lo: u32) -> Self {
        Self { hi, lo }
    }

    /// Field width in bits, zero for an inverted range.
    pub fn width(self) -> u32 {
        if self.hi >= self.lo {
            self.hi - self.lo + 1
        } else {
            0
        }
    }
}

impl From<[u32; 2]> for BitRange {
    fn from([hi, lo]: [u32; 2]) -> Self {
        Self { hi, lo }
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.hi, self.lo)
    }
}

/// A peripheral template.
///
/// Signals come from `signals`, or per instance from `signals_by_instance`,
/// which takes precedence for the instances it names.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeripheralDecl {
    /// Peripheral family name, e.g. `I2C`.
    pub name: String,
    /// Instances, in expansion order.
    pub instances: Vec<String>,
    /// Signals shared by every instance.
    #[serde(default)]
    pub signals: Option<Vec<String>>,
    /// Per-instance signal lists.
    #[serde(default)]
    pub signals_by_instance: Option<IndexMap<String, Vec<String>>>,
}

struct OffsetVisitor;

impl<'de> de::Visitor<'de> for OffsetVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a register offset as an integer or a \"0x\" hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
        u32::try_from(v).map_err(|_| E::custom(format!("register offset {v} exceeds 32 bits")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
        u32::try_from(v).map_err(|_| E::custom(format!("register offset {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
        let text = v.trim();
        let parsed = match text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => text.parse(),
        };
        parsed.map_err(|_| E::custom(format!("invalid register offset `{v}`")))
    }
}

fn register_offset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    deserializer.deserialize_any(OffsetVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTING: &str = r#"
registers:
  - name: USART1_PINR
    offset: 0x58
    fields:
      TXD: [5, 0]
      RXD: [13, 8]
  - name: I2C1_PINR
    offset: "0x70"
    fields: {SDA: [5, 0], SCL: [13, 8]}
  - name: TIM1_PINR
    offset: 128
peripherals:
  - name: I2C
    instances: [I2C1, I2C2]
    signals: [SDA, SCL]
  - name: TIM
    instances: [TIM1, TIM2]
    signals_by_instance:
      TIM1: [CH1, CH2, CH3, CH4]
      TIM2: [CH1, CH2]
"#;

    #[test]
    fn parses_registry() {
        let routing: RoutingSource = serde_yaml::from_str(ROUTING).unwrap();
        assert_eq!(routing.registers.len(), 3);
        let usart = &routing.registers[0];
        assert_eq!(usart.offset, 0x58);
        assert_eq!(usart.fields["TXD"], BitRange::new(5, 0));
        assert_eq!(usart.fields["RXD"].width(), 6);
        assert_eq!(routing.peripherals[1].signals, None);
        assert_eq!(
            routing.peripherals[1].signals_by_instance.as_ref().unwrap()["TIM2"],
            vec!["CH1".to_string(), "CH2".to_string()]
        );
    }

    #[test]
    fn offset_spellings() {
        let routing: RoutingSource = serde_yaml::from_str(ROUTING).unwrap();
        assert_eq!(routing.registers[1].offset, 0x70);
        assert_eq!(routing.registers[2].offset, 128);
    }

    #[test]
    fn bad_offset_rejected() {
        let src = "registers:\n  - {name: X_PINR, offset: \"0xZZ\"}\n";
        let err = serde_yaml::from_str::<RoutingSource>(src).unwrap_err();
        assert!(err.to_string().contains("invalid register offset"));
    }

    #[test]
    fn bit_range_display() {
        assert_eq!(BitRange::new(13, 8).to_string(), "[13, 8]");
        assert_eq!(BitRange::new(0, 3).width(), 0);
    }
}
