//! Function expansion: raw multiplexing entries → concrete functions.

use crate::error::PinmuxError;
use crate::registry::RoutingRegistry;
use crate::table::MuxTable;
use indexmap::IndexMap;
use silicon_model::Function;
use silicon_source::MuxEntry;
use std::collections::HashSet;

/// Name of the function a peripheral instance exposes for one signal.
pub fn function_name(instance: &str, signal: &str) -> String {
    format!("{instance}_{signal}")
}

/// Expands one pad's raw entries into its concrete function list.
///
/// Direct entries pass through unchanged. A templated entry becomes one
/// routed function per `(instance, signal)` pair of its peripheral, in
/// instance order and then signal order, all carrying the entry's select
/// code. Function names must be unique within the pad.
pub fn expand_pad(
    pad: &str,
    entries: &[MuxEntry],
    registry: &RoutingRegistry,
) -> Result<Vec<Function>, PinmuxError> {
    let mut functions = Vec::with_capacity(entries.len());

    for entry in entries {
        if !entry.requires_routing {
            functions.push(Function::direct(&entry.function, entry.select));
            continue;
        }

        let peripheral =
            registry
                .peripheral(&entry.function)
                .ok_or_else(|| PinmuxError::UnknownPeripheral {
                    pad: pad.to_string(),
                    peripheral: entry.function.clone(),
                })?;

        for instance in &peripheral.instances {
            let signals =
                peripheral
                    .signals_for(instance)
                    .ok_or_else(|| PinmuxError::MissingInstanceSignals {
                        pad: pad.to_string(),
                        peripheral: peripheral.name.clone(),
                        instance: instance.clone(),
                    })?;
            for signal in signals {
                functions.push(Function::routed(
                    function_name(instance, signal),
                    entry.select,
                ));
            }
        }
    }

    let mut seen = HashSet::with_capacity(functions.len());
    let duplicate = functions
        .iter()
        .find(|f| !seen.insert(f.name.as_str()))
        .map(|f| f.name.clone());
    if let Some(function) = duplicate {
        return Err(PinmuxError::DuplicateFunction {
            pad: pad.to_string(),
            function,
        });
    }

    Ok(functions)
}

/// Expands the given pads in the order given, looking each one up in the
/// table. Pads the table does not mention get an empty function list.
pub fn expand_pads<'a, I>(
    pads: I,
    table: &MuxTable,
    registry: &RoutingRegistry,
) -> Result<IndexMap<String, Vec<Function>>, PinmuxError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut expanded = IndexMap::new();
    for pad in pads {
        let entries = table.entries(pad);
        let functions = expand_pad(pad, entries, registry)?;
        tracing::trace!(pad, raw = entries.len(), expanded = functions.len(), "expanded pad");
        expanded.insert(pad.to_string(), functions);
    }
    Ok(expanded)
}
