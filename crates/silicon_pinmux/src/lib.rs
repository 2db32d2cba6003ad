//! Shared multiplexing table, secondary-routing registry and the function
//! expander that turns raw multiplexing entries into concrete functions.
//!
//! Expansion is a pure function of `(entries, registry)`: it never touches
//! the filesystem and has no state, so each pad can be expanded and tested
//! on its own.

#![warn(missing_docs)]

pub mod error;
pub mod expand;
pub mod registry;
pub mod table;

pub use error::PinmuxError;
pub use expand::{expand_pad, expand_pads, function_name};
pub use registry::{PeripheralTemplate, RoutingRegister, RoutingRegistry, PINR_SUFFIX};
pub use table::MuxTable;
