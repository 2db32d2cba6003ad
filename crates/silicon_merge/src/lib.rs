//! The chip merger: combines a chip's pad and variant declarations with the
//! expanded function lists into a normalized [`SeriesDocument`].
//!
//! Merging runs in two passes. The first builds the series pad set; the
//! second resolves every pin's pad reference against it, so the order in
//! which declarations appear never affects resolution.
//!
//! [`SeriesDocument`]: silicon_model::SeriesDocument

#![warn(missing_docs)]

pub mod error;
pub mod merger;

pub use error::MergeError;
pub use merger::{check_sip_memory, merge_chip, MergeOptions};
