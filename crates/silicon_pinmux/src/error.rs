//! Error types for registry construction and function expansion.

use silicon_source::BitRange;

/// Errors raised while building the routing registry or expanding a pad.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinmuxError {
    /// A templated entry names a peripheral the registry does not define.
    #[error("pad {pad}: unknown peripheral `{peripheral}`")]
    UnknownPeripheral {
        /// The pad whose entry failed.
        pad: String,
        /// The peripheral name from the entry.
        peripheral: String,
    },

    /// A peripheral instance has neither a uniform nor an override signal list.
    #[error("pad {pad}: peripheral `{peripheral}` has no signals for instance `{instance}`")]
    MissingInstanceSignals {
        /// The pad whose entry failed.
        pad: String,
        /// The peripheral template.
        peripheral: String,
        /// The instance without signals.
        instance: String,
    },

    /// Two entries of one pad produce the same function name.
    #[error("pad {pad}: function `{function}` is declared more than once")]
    DuplicateFunction {
        /// The pad.
        pad: String,
        /// The repeated function name.
        function: String,
    },

    /// Two registers share a name.
    #[error("routing register `{name}` is declared more than once")]
    DuplicateRegister {
        /// Register name.
        name: String,
    },

    /// Two peripheral templates share a name.
    #[error("peripheral `{name}` is declared more than once")]
    DuplicatePeripheral {
        /// Peripheral name.
        name: String,
    },

    /// A register field has `hi < lo` or lies outside a 32-bit register.
    #[error("register `{register}` field `{signal}`: invalid bit range {range}")]
    InvalidBitRange {
        /// Register name.
        register: String,
        /// Field (signal) name.
        signal: String,
        /// The offending range.
        range: BitRange,
    },

    /// `signals_by_instance` names an instance missing from `instances`.
    #[error("peripheral `{peripheral}`: signal override for unknown instance `{instance}`")]
    StrayInstanceOverride {
        /// Peripheral name.
        peripheral: String,
        /// The unknown instance.
        instance: String,
    },
}

impl PinmuxError {
    /// The pad the error is attributed to, when it concerns a single pad.
    pub fn pad(&self) -> Option<&str> {
        match self {
            PinmuxError::UnknownPeripheral { pad, .. }
            | PinmuxError::MissingInstanceSignals { pad, .. }
            | PinmuxError::DuplicateFunction { pad, .. } => Some(pad),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_peripheral_names_pad_and_peripheral() {
        let err = PinmuxError::UnknownPeripheral {
            pad: "PA10".to_string(),
            peripheral: "SPI3".to_string(),
        };
        assert_eq!(err.to_string(), "pad PA10: unknown peripheral `SPI3`");
        assert_eq!(err.pad(), Some("PA10"));
    }

    #[test]
    fn registry_errors_have_no_pad() {
        let err = PinmuxError::InvalidBitRange {
            register: "I2C1_PINR".to_string(),
            signal: "SDA".to_string(),
            range: BitRange::new(0, 5),
        };
        assert_eq!(
            err.to_string(),
            "register `I2C1_PINR` field `SDA`: invalid bit range [0, 5]"
        );
        assert_eq!(err.pad(), None);
    }
}
