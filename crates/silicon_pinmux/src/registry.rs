//! The secondary-routing registry: PINR registers and peripheral templates.

use crate::error::PinmuxError;
use indexmap::IndexMap;
use silicon_source::{BitRange, RoutingSource};

/// Suffix of the routing register that serves one peripheral instance.
pub const PINR_SUFFIX: &str = "_PINR";

/// A validated routing register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingRegister {
    /// Register name.
    pub name: String,
    /// Byte offset within the routing block.
    pub offset: u32,
    /// Signal → bit-field.
    pub fields: IndexMap<String, BitRange>,
}

impl RoutingRegister {
    /// Looks up the bit-field of a signal.
    pub fn field(&self, signal: &str) -> Option<BitRange> {
        self.fields.get(signal).copied()
    }
}

/// A validated peripheral template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeripheralTemplate {
    /// Peripheral family name.
    pub name: String,
    /// Instances, in expansion order.
    pub instances: Vec<String>,
    signals: Option<Vec<String>>,
    overrides: IndexMap<String, Vec<String>>,
}

impl PeripheralTemplate {
    /// The signal list of one instance: its override if present, else the
    /// uniform list. `None` when neither yields a non-empty list.
    pub fn signals_for(&self, instance: &str) -> Option<&[String]> {
        self.overrides
            .get(instance)
            .or(self.signals.as_ref())
            .map(Vec::as_slice)
            .filter(|s| !s.is_empty())
    }
}

/// Registers and peripheral templates of one chip family, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct RoutingRegistry {
    registers: IndexMap<String, RoutingRegister>,
    peripherals: IndexMap<String, PeripheralTemplate>,
}

impl RoutingRegistry {
    /// An empty registry; every templated entry fails against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from its source, rejecting duplicate names,
    /// malformed bit ranges and overrides for undeclared instances.
    pub fn from_source(source: &RoutingSource) -> Result<Self, PinmuxError> {
        let mut registry = Self::new();

        for decl in &source.registers {
            for (signal, range) in &decl.fields {
                if range.hi < range.lo || range.hi > 31 {
                    return Err(PinmuxError::InvalidBitRange {
                        register: decl.name.clone(),
                        signal: signal.clone(),
                        range: *range,
                    });
                }
            }
            let register = RoutingRegister {
                name: decl.name.clone(),
                offset: decl.offset,
                fields: decl.fields.clone(),
            };
            if registry
                .registers
                .insert(decl.name.clone(), register)
                .is_some()
            {
                return Err(PinmuxError::DuplicateRegister {
                    name: decl.name.clone(),
                });
            }
        }

        for decl in &source.peripherals {
            let overrides = decl.signals_by_instance.clone().unwrap_or_default();
            if let Some(stray) = overrides.keys().find(|i| !decl.instances.contains(*i)) {
                return Err(PinmuxError::StrayInstanceOverride {
                    peripheral: decl.name.clone(),
                    instance: stray.clone(),
                });
            }
            let template = PeripheralTemplate {
                name: decl.name.clone(),
                instances: decl.instances.clone(),
                signals: decl.signals.clone(),
                overrides,
            };
            if registry
                .peripherals
                .insert(decl.name.clone(), template)
                .is_some()
            {
                return Err(PinmuxError::DuplicatePeripheral {
                    name: decl.name.clone(),
                });
            }
        }

        Ok(registry)
    }

    /// The PINR register of a peripheral instance (`<INSTANCE>_PINR`).
    pub fn pinr_register(&self, instance: &str) -> Option<&RoutingRegister> {
        self.registers.get(&format!("{instance}{PINR_SUFFIX}"))
    }

    /// Looks up a peripheral template by name.
    pub fn peripheral(&self, name: &str) -> Option<&PeripheralTemplate> {
        self.peripherals.get(name)
    }

    /// Number of registers.
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    /// Number of peripheral templates.
    pub fn peripheral_count(&self) -> usize {
        self.peripherals.len()
    }
}
