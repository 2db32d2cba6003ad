//! Dense, ID-indexed storage for shared document structures.
//!
//! [`Arena`] hands out stable opaque IDs on insertion. [`DedupArena`] adds
//! structural interning on top: inserting a value equal to one already stored
//! returns the existing ID, so many owners can refer to one structure by
//! handle instead of by pointer.

use crate::hash::ContentHash;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Index;

/// Trait for opaque ID types used as arena keys.
///
/// Implementors must provide a bijection between `u32` indices and the ID type.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// Declares a `u32`-backed opaque ID newtype implementing [`ArenaId`].
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
        pub struct $name(u32);

        impl $crate::arena::ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

/// A dense, append-only container addressed by opaque IDs.
///
/// Items are never reordered or removed, so IDs stay valid for the lifetime
/// of the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Stores an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Returns the item with the given ID, or `None` if the ID is foreign.
    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }
}

/// An [`Arena`] that interns structurally equal values.
///
/// Lookups go through a 128-bit [`ContentHash`]; a hash hit is confirmed
/// with a full equality check before the existing ID is reused, so a
/// collision can only cost a duplicate slot, never a wrong answer.
#[derive(Debug, Clone)]
pub struct DedupArena<I: ArenaId, T> {
    arena: Arena<I, T>,
    index: HashMap<ContentHash, Vec<I>>,
}

impl<I: ArenaId, T> Default for DedupArena<I, T> {
    fn default() -> Self {
        Self {
            arena: Arena::new(),
            index: HashMap::new(),
        }
    }
}

impl<I: ArenaId, T: Hash + Eq> DedupArena<I, T> {
    /// Creates a new, empty interning arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of a stored value equal to `item`, storing it first if
    /// no such value exists yet.
    pub fn intern(&mut self, item: T) -> I {
        let key = ContentHash::of(&item);
        if let Some(candidates) = self.index.get(&key) {
            for &id in candidates {
                if self.arena[id] == item {
                    return id;
                }
            }
        }
        let id = self.arena.alloc(item);
        self.index.entry(key).or_default().push(id);
        id
    }

    /// Stores `item` unconditionally, bypassing de-duplication.
    pub fn alloc_unshared(&mut self, item: T) -> I {
        self.arena.alloc(item)
    }

    /// Consumes the interner, keeping only the dense storage.
    pub fn into_arena(self) -> Arena<I, T> {
        self.arena
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    define_id!(
        /// Test-only ID.
        TestId
    );

    #[test]
    fn alloc_and_index() {
        let mut arena: Arena<TestId, String> = Arena::new();
        let id = arena.alloc("QFN68".to_string());
        assert_eq!(arena[id], "QFN68");
        assert_eq!(arena.get(id).map(String::as_str), Some("QFN68"));
    }

    #[test]
    fn ids_are_sequential() {
        let mut arena: Arena<TestId, u32> = Arena::new();
        arena.alloc(100);
        arena.alloc(200);
        let ids: Vec<u32> = arena.iter().map(|(id, _)| id.as_raw()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn foreign_id_is_none() {
        let arena: Arena<TestId, u32> = Arena::new();
        assert!(arena.get(TestId::from_raw(3)).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn intern_reuses_equal_values() {
        let mut arena: DedupArena<TestId, Vec<&str>> = DedupArena::new();
        let a = arena.intern(vec!["PA00", "PA01"]);
        let b = arena.intern(vec!["PA00", "PA01"]);
        let c = arena.intern(vec!["PA01", "PA00"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(arena.into_arena().len(), 2);
    }

    #[test]
    fn unshared_alloc_never_reuses() {
        let mut arena: DedupArena<TestId, Vec<&str>> = DedupArena::new();
        let a = arena.alloc_unshared(vec!["PA00"]);
        let b = arena.alloc_unshared(vec!["PA00"]);
        assert_ne!(a, b);
        let arena = arena.into_arena();
        assert_eq!(arena[a], arena[b]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut arena: Arena<TestId, String> = Arena::new();
        arena.alloc("first".to_string());
        arena.alloc("second".to_string());
        let json = serde_json::to_string(&arena).unwrap();
        let restored: Arena<TestId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[TestId::from_raw(1)], "second");
    }
}
