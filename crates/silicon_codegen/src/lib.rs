//! Register-level encodings and the C pinmux header.
//!
//! The [`resolve`] module computes a [`RoutingDescriptor`] for every
//! pad-function pair of a series document. The [`header`] module renders
//! those descriptors as one `#define` per pair on top of a `PINMUX(...)`
//! packing macro whose layout is fixed by [`descriptor`].

#![warn(missing_docs)]

pub mod descriptor;
pub mod error;
pub mod header;
pub mod resolve;

pub use descriptor::RoutingDescriptor;
pub use error::EncodingError;
pub use header::{emit_header, constant_name, Header, HeaderDecl};
pub use resolve::{resolve_encodings, resolve_function, split_function_name, Encoding, EncodingTable};
