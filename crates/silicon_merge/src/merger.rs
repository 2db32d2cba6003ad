//! Two-pass chip merge.

use crate::error::MergeError;
use indexmap::IndexMap;
use silicon_common::DedupArena;
use silicon_model::{
    Function, MemoryDevice, Pad, Pin, PinList, PinListId, SeriesDocument, Variant,
};
use silicon_source::{ChipSource, MpiSource, VariantDecl};
use std::collections::HashSet;

/// Merge settings for one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeOptions {
    /// Store structurally identical pin lists once. Never changes the
    /// serialized document, only how it is held and how YAML anchors it.
    pub share_pin_lists: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            share_pin_lists: true,
        }
    }
}

/// Merges a chip source with its expanded functions into a series document.
///
/// `functions` maps pad names to their expanded function lists; declared
/// pads missing from it get an empty list. When `mpi` is given, every
/// memory device must sit on a SiP interface.
pub fn merge_chip(
    chip: &ChipSource,
    functions: &IndexMap<String, Vec<Function>>,
    mpi: Option<&MpiSource>,
    options: &MergeOptions,
) -> Result<SeriesDocument, MergeError> {
    // Pass 1: the series pad set.
    let pads: IndexMap<String, Pad> = chip
        .pads
        .iter()
        .map(|(name, decl)| {
            let pad = Pad {
                pad_type: decl.pad_type,
                description: decl.description.clone(),
                notes: decl.notes.clone(),
                functions: functions.get(name).cloned().unwrap_or_default(),
            };
            (name.clone(), pad)
        })
        .collect();

    // Pass 2: variants, resolving every pin against the pad set.
    let mut pin_lists: DedupArena<PinListId, PinList> = DedupArena::new();
    let mut part_numbers = HashSet::new();
    let mut variants = Vec::with_capacity(chip.variants.len());

    for decl in &chip.variants {
        if !part_numbers.insert(decl.part_number.as_str()) {
            return Err(MergeError::DuplicatePartNumber {
                part_number: decl.part_number.clone(),
            });
        }
        if let Some(mpi) = mpi {
            check_sip_memory(&decl.part_number, &decl.memory, mpi)?;
        }

        let list = resolve_pins(decl, &pads)?;
        let pins = if options.share_pin_lists {
            pin_lists.intern(list)
        } else {
            pin_lists.alloc_unshared(list)
        };

        variants.push(Variant {
            part_number: decl.part_number.clone(),
            description: decl.description.clone(),
            package: decl.package.clone(),
            pins,
            memory: decl.memory.clone(),
        });
    }

    let pin_lists = pin_lists.into_arena();
    tracing::debug!(
        model_id = %chip.model_id,
        pads = pads.len(),
        variants = variants.len(),
        pin_lists = pin_lists.len(),
        "merged chip"
    );

    Ok(SeriesDocument {
        schema_version: chip.schema_version,
        model_id: chip.model_id.clone(),
        lifecycle: chip.lifecycle,
        docs: chip.docs.clone(),
        pads,
        variants,
        pin_lists,
    })
}

fn resolve_pins(decl: &VariantDecl, pads: &IndexMap<String, Pad>) -> Result<PinList, MergeError> {
    let mut numbers = HashSet::with_capacity(decl.pins.len());
    let mut list = Vec::with_capacity(decl.pins.len());

    for pin in &decl.pins {
        if !numbers.insert(pin.number.as_str()) {
            return Err(MergeError::DuplicatePinNumber {
                part_number: decl.part_number.clone(),
                number: pin.number.clone(),
            });
        }
        if let Some(missing) = pin.pad.pads().iter().find(|p| !pads.contains_key(*p)) {
            return Err(MergeError::UnknownPadReference {
                part_number: decl.part_number.clone(),
                pin: pin.number.clone(),
                pad: missing.clone(),
            });
        }
        list.push(Pin {
            number: pin.number.clone(),
            pad: pin.pad.clone(),
        });
    }
    Ok(list)
}

/// Checks that every memory device of a variant sits on an interface marked
/// `sip: true` in the family's MPI table.
pub fn check_sip_memory(
    part_number: &str,
    memory: &[MemoryDevice],
    mpi: &MpiSource,
) -> Result<(), MergeError> {
    match memory.iter().find(|m| !mpi.is_sip(&m.mpi)) {
        Some(device) => Err(MergeError::NonSipMemory {
            part_number: part_number.to_string(),
            mpi: device.mpi.clone(),
        }),
        None => Ok(()),
    }
}
