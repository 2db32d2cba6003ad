//! The shared multiplexing table (`pinmux.yaml`).

use indexmap::IndexMap;
use serde::Deserialize;

/// Family-wide pad → selectable functions table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PinmuxTableSource {
    /// Raw entries per pad, in declaration order.
    #[serde(default)]
    pub pinmux: IndexMap<String, Vec<MuxEntry>>,
}

/// One raw multiplexing entry of a pad.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MuxEntry {
    /// A concrete function name, or a peripheral template name when
    /// `requires_routing` is set.
    pub function: String,
    /// Pinmux select code.
    pub select: u32,
    /// Whether the entry names a peripheral template needing PINR routing.
    #[serde(default)]
    pub requires_routing: bool,
}

impl MuxEntry {
    /// A direct entry.
    pub fn direct(function: impl Into<String>, select: u32) -> Self {
        Self {
            function: function.into(),
            select,
            requires_routing: false,
        }
    }

    /// A templated entry naming a peripheral.
    pub fn templated(peripheral: impl Into<String>, select: u32) -> Self {
        Self {
            function: peripheral.into(),
            select,
            requires_routing: true,
        }
    }
}
