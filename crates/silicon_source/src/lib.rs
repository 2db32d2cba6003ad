//! Source documents read by the build: per-chip declarations, the shared
//! multiplexing table, the secondary-routing registry and the MPI table.
//!
//! Every document is a plain serde model loaded from YAML by the functions in
//! [`loader`]. Nothing here resolves references between documents; that is
//! the job of the pinmux and merge stages.

#![warn(missing_docs)]

pub mod chip;
pub mod error;
pub mod loader;
pub mod mpi;
pub mod pinmux;
pub mod routing;

pub use chip::{ChipSource, PadDecl, PinDecl, VariantDecl};
pub use error::SourceError;
pub use loader::{
    load_chip, load_mpi, load_optional, load_pinmux_table, load_routing, parse_yaml, CHIP_FILE,
    MPI_FILE, PINMUX_FILE, ROUTING_FILE,
};
pub use mpi::{MpiDecl, MpiSource};
pub use pinmux::{MuxEntry, PinmuxTableSource};
pub use routing::{BitRange, PeripheralDecl, RegisterDecl, RoutingSource};
