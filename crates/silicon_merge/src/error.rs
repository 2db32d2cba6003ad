//! Error types for the chip merger.

/// Errors raised while merging a chip into a series document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// A pin refers to a pad the chip does not declare.
    #[error("variant {part_number}, pin {pin}: unknown pad `{pad}`")]
    UnknownPadReference {
        /// The variant.
        part_number: String,
        /// The package pin.
        pin: String,
        /// The unresolved pad name.
        pad: String,
    },

    /// Two variants share a part number.
    #[error("part number `{part_number}` is declared more than once")]
    DuplicatePartNumber {
        /// The repeated part number.
        part_number: String,
    },

    /// A variant lists the same package pin twice.
    #[error("variant {part_number}: pin `{number}` is declared more than once")]
    DuplicatePinNumber {
        /// The variant.
        part_number: String,
        /// The repeated pin identifier.
        number: String,
    },

    /// A variant places memory on an interface that is not wired to SiP memory.
    #[error("variant {part_number}: memory on `{mpi}`, which is not a SiP interface")]
    NonSipMemory {
        /// The variant.
        part_number: String,
        /// The MPI named by the memory entry.
        mpi: String,
    },
}
