//! The normalized series document and its serialized forms.
//!
//! A [`SeriesDocument`] is the fully resolved description of one chip series:
//! series metadata, the ordered pad set with concrete function lists, and the
//! variants whose pin lists live in a shared arena so pin-compatible packages
//! can refer to one list by [`PinListId`].

#![warn(missing_docs)]

pub mod document;
pub mod pad;
pub mod types;
pub mod variant;
pub mod writer;

pub use document::SeriesDocument;
pub use pad::{Function, Pad};
pub use types::{DocEntry, Lifecycle, PadType};
pub use variant::{MemoryDevice, PadBinding, Pin, PinList, PinListId, Variant};
pub use writer::write_yaml;
