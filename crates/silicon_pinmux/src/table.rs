//! The shared multiplexing table of a chip family.

use indexmap::IndexMap;
use silicon_source::{MuxEntry, PinmuxTableSource};

/// Pad name → raw multiplexing entries, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct MuxTable {
    entries: IndexMap<String, Vec<MuxEntry>>,
}

impl MuxTable {
    /// An empty table, used when a chip names no shared table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a loaded table source.
    pub fn from_source(source: PinmuxTableSource) -> Self {
        Self {
            entries: source.pinmux,
        }
    }

    /// Raw entries of a pad. Pads the table does not mention have none.
    pub fn entries(&self, pad: &str) -> &[MuxEntry] {
        self.entries.get(pad).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if the table has a row for `pad`.
    pub fn contains(&self, pad: &str) -> bool {
        self.entries.contains_key(pad)
    }

    /// Iterates `(pad, entries)` rows in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MuxEntry])> {
        self.entries
            .iter()
            .map(|(pad, entries)| (pad.as_str(), entries.as_slice()))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pad_has_no_entries() {
        let mut source = PinmuxTableSource::default();
        source
            .pinmux
            .insert("PA00".to_string(), vec![MuxEntry::direct("GPIO_A0", 0)]);
        let table = MuxTable::from_source(source);
        assert_eq!(table.entries("PA00").len(), 1);
        assert!(table.entries("VDD").is_empty());
        assert!(table.contains("PA00"));
        assert!(!table.contains("VDD"));
        assert_eq!(table.iter().map(|(pad, _)| pad).collect::<Vec<_>>(), vec!["PA00"]);
        assert_eq!(table.len(), 1);
        assert!(MuxTable::new().is_empty());
    }
}
