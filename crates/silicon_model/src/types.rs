//! Enumerations and small value types shared by sources and documents.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Electrical type of a pad. Fixed for a pad across every chip of a series.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PadType {
    /// Digital input only.
    Input,
    /// Digital output only.
    Output,
    /// Digital input/output.
    Bidirectional,
    /// Analog signal.
    Analog,
    /// Power supply input.
    PowerInput,
    /// Power supply output (regulator output, reference).
    PowerOutput,
    /// Ground.
    Ground,
    /// Not connected.
    NoConnect,
}

impl PadType {
    /// Every variant, in declaration order.
    pub const ALL: [PadType; 8] = [
        PadType::Input,
        PadType::Output,
        PadType::Bidirectional,
        PadType::Analog,
        PadType::PowerInput,
        PadType::PowerOutput,
        PadType::Ground,
        PadType::NoConnect,
    ];

    /// The serialized spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PadType::Input => "input",
            PadType::Output => "output",
            PadType::Bidirectional => "bidirectional",
            PadType::Analog => "analog",
            PadType::PowerInput => "power_input",
            PadType::PowerOutput => "power_output",
            PadType::Ground => "ground",
            PadType::NoConnect => "no_connect",
        }
    }
}

impl fmt::Display for PadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a chip series.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Engineering samples, data may change.
    Preview,
    /// In volume production.
    Production,
    /// Not recommended for new designs.
    Nrnd,
    /// End of life announced.
    Eol,
    /// No longer available.
    Discontinued,
}

impl Lifecycle {
    /// Every variant, in declaration order.
    pub const ALL: [Lifecycle; 5] = [
        Lifecycle::Preview,
        Lifecycle::Production,
        Lifecycle::Nrnd,
        Lifecycle::Eol,
        Lifecycle::Discontinued,
    ];

    /// The serialized spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Preview => "preview",
            Lifecycle::Production => "production",
            Lifecycle::Nrnd => "nrnd",
            Lifecycle::Eol => "eol",
            Lifecycle::Discontinued => "discontinued",
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documentation entry: document kind → locale → URL,
/// e.g. `{datasheet: {en: "https://…", zh: "https://…"}}`.
pub type DocEntry = IndexMap<String, IndexMap<String, String>>;
