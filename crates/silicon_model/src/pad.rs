//! Pads and their resolved function lists.

use crate::types::PadType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One selectable function of a pad.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Function {
    /// Concrete function name, `<PERIPHERAL>_<SIGNAL>` (e.g. `I2C1_SDA`).
    #[schemars(length(min = 1))]
    pub name: String,
    /// Pinmux select code. Several functions of one pad may share a code.
    pub select: u32,
    /// Whether the function needs secondary (PINR register) routing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub routed: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Function {
    /// A function selected by its code alone.
    pub fn direct(name: impl Into<String>, select: u32) -> Self {
        Self {
            name: name.into(),
            select,
            routed: false,
        }
    }

    /// A function that additionally needs a routing register write.
    pub fn routed(name: impl Into<String>, select: u32) -> Self {
        Self {
            name: name.into(),
            select,
            routed: true,
        }
    }
}

/// A wafer-level pad of a series.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pad {
    /// Electrical type.
    #[serde(rename = "type")]
    pub pad_type: PadType,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Fully expanded functions, in select order as declared.
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Pad {
    /// Looks up a function by name.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}
