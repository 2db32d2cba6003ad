//! Decoding of conventional pad names into GPIO port and pin index.
//!
//! Routable pads follow the `P<port><index>` convention: a literal `P`, one
//! uppercase port letter, and a decimal pin index (`PA00`, `PB12`). Power,
//! ground and analog-only pads use free-form names and have no location.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest pin index accepted within one port.
pub const MAX_PIN_INDEX: u8 = 127;

/// A GPIO port identified by its letter (`A` is port 0).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Port(u8);

impl Port {
    /// Creates a port from its uppercase letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self(letter as u8 - b'A'))
        } else {
            None
        }
    }

    /// Creates a port from its zero-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 26 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the zero-based port index (`A` = 0).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the port letter.
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The port/pin identity encoded in a conventional pad name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PadLocation {
    /// The GPIO port.
    pub port: Port,
    /// The pin index within the port.
    pub index: u8,
}

/// Why a pad name could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PadNameError {
    /// The name does not have the `P<letter><digits>` shape.
    #[error("pad name '{0}' does not match the P<port><index> convention")]
    Malformed(String),

    /// The pin index does not fit the encoding.
    #[error("pad name '{name}' has pin index {index}, maximum is {MAX_PIN_INDEX}")]
    IndexOutOfRange {
        /// The offending pad name.
        name: String,
        /// The decoded index.
        index: u32,
    },
}

impl FromStr for PadLocation {
    type Err = PadNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let malformed = || PadNameError::Malformed(name.to_string());

        let rest = name.strip_prefix('P').ok_or_else(malformed)?;
        let mut chars = rest.chars();
        let port = chars
            .next()
            .and_then(Port::from_letter)
            .ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let index: u32 = digits.parse().map_err(|_| malformed())?;
        if index > u32::from(MAX_PIN_INDEX) {
            return Err(PadNameError::IndexOutOfRange {
                name: name.to_string(),
                index,
            });
        }
        Ok(Self {
            port,
            index: index as u8,
        })
    }
}

impl fmt::Display for PadLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{:02}", self.port, self.index)
    }
}
