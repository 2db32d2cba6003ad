//! Error types for encoding resolution.

use silicon_common::PadNameError;

/// Errors raised while computing routing descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The instance's `<INSTANCE>_PINR` register is not in the registry.
    #[error("pad {pad}, function {function}: unknown routing register `{register}`")]
    UnknownRegister {
        /// The pad.
        pad: String,
        /// The routed function.
        function: String,
        /// The register looked up.
        register: String,
    },

    /// The register has no field for the function's signal.
    #[error("pad {pad}, function {function}: register `{register}` has no field `{signal}`")]
    UnknownField {
        /// The pad.
        pad: String,
        /// The routed function.
        function: String,
        /// The register.
        register: String,
        /// The signal looked up.
        signal: String,
    },

    /// The pad name does not encode a port and pin index.
    #[error("pad {pad}: {source}")]
    MalformedPadName {
        /// The pad.
        pad: String,
        /// Why decoding failed.
        source: PadNameError,
    },

    /// A routed function name has no `<INSTANCE>_<SIGNAL>` split.
    #[error("pad {pad}: routed function `{function}` is not of the form <INSTANCE>_<SIGNAL>")]
    MalformedFunctionName {
        /// The pad.
        pad: String,
        /// The function name.
        function: String,
    },

    /// A value does not fit its slot of the packed descriptor.
    #[error("pad {pad}, function {function}: {field} {value} exceeds {max}")]
    FieldOutOfRange {
        /// The pad.
        pad: String,
        /// The function.
        function: String,
        /// Which descriptor field overflowed.
        field: &'static str,
        /// The value.
        value: u32,
        /// The largest value the field holds.
        max: u32,
    },

    /// Two pad-function pairs map to the same header constant name.
    #[error("pad {pad}, function {function}: constant `{constant}` already defined by {previous}")]
    DuplicateConstant {
        /// The pad.
        pad: String,
        /// The function whose constant clashes.
        function: String,
        /// The clashing constant name.
        constant: String,
        /// The pair that defined it first, as `<pad>.<function>`.
        previous: String,
    },
}

impl EncodingError {
    /// The pad the error is attributed to.
    pub fn pad(&self) -> &str {
        match self {
            EncodingError::UnknownRegister { pad, .. }
            | EncodingError::UnknownField { pad, .. }
            | EncodingError::MalformedPadName { pad, .. }
            | EncodingError::MalformedFunctionName { pad, .. }
            | EncodingError::FieldOutOfRange { pad, .. }
            | EncodingError::DuplicateConstant { pad, .. } => pad,
        }
    }
}
