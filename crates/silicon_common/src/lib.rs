//! Shared foundational types used across the silicon schema toolchain.
//!
//! This crate provides content hashing, dense ID-indexed arenas with optional
//! structural de-duplication, and pad-name decoding.

#![warn(missing_docs)]

pub mod arena;
pub mod hash;
pub mod pad_name;

pub use arena::{Arena, ArenaId, DedupArena};
pub use hash::ContentHash;
pub use pad_name::{PadLocation, PadNameError, Port};
