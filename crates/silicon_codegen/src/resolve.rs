//! Encoding resolution for every pad-function pair of a series.

use crate::descriptor::RoutingDescriptor;
use crate::error::EncodingError;
use crate::header::constant_name;
use silicon_common::PadLocation;
use silicon_model::{Function, SeriesDocument};
use silicon_pinmux::{RoutingRegistry, PINR_SUFFIX};
use std::collections::HashMap;

/// Splits a routed function name into `(instance, signal)` at the first `_`.
pub fn split_function_name(name: &str) -> Option<(&str, &str)> {
    name.split_once('_')
        .filter(|(instance, signal)| !instance.is_empty() && !signal.is_empty())
}

/// Computes the descriptor of one function on a pad.
///
/// Direct functions encode `{port, pin, select, 0, 0}`. Routed functions
/// look up `<INSTANCE>_PINR` and the signal's field in it, and take the
/// register offset and the field's low bit.
pub fn resolve_function(
    pad: &str,
    location: PadLocation,
    function: &Function,
    registry: &RoutingRegistry,
) -> Result<RoutingDescriptor, EncodingError> {
    let (offset, field_position) = if function.routed {
        let (instance, signal) =
            split_function_name(&function.name).ok_or_else(|| {
                EncodingError::MalformedFunctionName {
                    pad: pad.to_string(),
                    function: function.name.clone(),
                }
            })?;
        let register =
            registry
                .pinr_register(instance)
                .ok_or_else(|| EncodingError::UnknownRegister {
                    pad: pad.to_string(),
                    function: function.name.clone(),
                    register: format!("{instance}{PINR_SUFFIX}"),
                })?;
        let field = register
            .field(signal)
            .ok_or_else(|| EncodingError::UnknownField {
                pad: pad.to_string(),
                function: function.name.clone(),
                register: register.name.clone(),
                signal: signal.to_string(),
            })?;
        (register.offset, field.lo)
    } else {
        (0, 0)
    };

    let descriptor = RoutingDescriptor {
        port: location.port,
        pin: location.index,
        select: function.select,
        offset,
        field_position,
    };
    if let Some((slot, value)) = descriptor.overflow() {
        return Err(EncodingError::FieldOutOfRange {
            pad: pad.to_string(),
            function: function.name.clone(),
            field: slot.name,
            value,
            max: slot.max(),
        });
    }
    Ok(descriptor)
}

/// The resolved encoding of one pad-function pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    /// Pad name.
    pub pad: String,
    /// Function name.
    pub function: String,
    /// Whether the function is routed through a PINR register.
    pub routed: bool,
    /// The descriptor.
    pub descriptor: RoutingDescriptor,
}

/// Encodings of a whole series in pad order, then function order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodingTable {
    entries: Vec<Encoding>,
}

impl EncodingTable {
    /// All encodings in order.
    pub fn iter(&self) -> impl Iterator<Item = &Encoding> {
        self.entries.iter()
    }

    /// Number of routed encodings.
    pub fn routed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.routed).count()
    }

    /// Number of encodings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no encodings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves every function of every pad. Pads without functions (power,
/// ground, analog) are skipped and need no conventional name.
///
/// Fails if two pairs would emit the same header constant.
pub fn resolve_encodings(
    doc: &SeriesDocument,
    registry: &RoutingRegistry,
) -> Result<EncodingTable, EncodingError> {
    let mut entries = Vec::new();
    let mut constants: HashMap<String, String> = HashMap::new();
    for (pad, data) in &doc.pads {
        if data.functions.is_empty() {
            continue;
        }
        let location: PadLocation =
            pad.parse()
                .map_err(|source| EncodingError::MalformedPadName {
                    pad: pad.clone(),
                    source,
                })?;
        for function in &data.functions {
            let constant = constant_name(pad, &function.name);
            if let Some(previous) = constants.get(&constant) {
                return Err(EncodingError::DuplicateConstant {
                    pad: pad.clone(),
                    function: function.name.clone(),
                    constant,
                    previous: previous.clone(),
                });
            }
            let descriptor = resolve_function(pad, location, function, registry)?;
            constants.insert(constant, format!("{pad}.{}", function.name));
            entries.push(Encoding {
                pad: pad.clone(),
                function: function.name.clone(),
                routed: function.routed,
                descriptor,
            });
        }
    }
    let table = EncodingTable { entries };
    tracing::debug!(
        model_id = %doc.model_id,
        encodings = table.len(),
        routed = table.routed_count(),
        "resolved encodings"
    );
    Ok(table)
}
