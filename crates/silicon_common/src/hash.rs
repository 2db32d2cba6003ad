//! Content hashing for structural de-duplication and artifact fingerprints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// A 128-bit content hash computed using XXH3.
///
/// Two values with the same `ContentHash` are assumed to be structurally
/// identical. Used to find pin lists that can be shared between variants and
/// to fingerprint emitted artifacts in build logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Computes a content hash of any [`Hash`] value by feeding its
    /// `Hash` implementation into an XXH3 streaming state.
    ///
    /// The result is stable within one process, which is all the in-memory
    /// de-duplication needs. Use [`from_bytes`](Self::from_bytes) for
    /// fingerprints that must survive across runs.
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut writer = Xxh3Writer(Xxh3::new());
        value.hash(&mut writer);
        Self(writer.0.digest128().to_le_bytes())
    }
}

/// Adapts the XXH3 streaming state to [`std::hash::Hasher`].
struct Xxh3Writer(Xxh3);

impl Hasher for Xxh3Writer {
    fn finish(&self) -> u64 {
        self.0.digest()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_deterministic() {
        let a = ContentHash::from_bytes(b"pads:\n  PA00:\n");
        let b = ContentHash::from_bytes(b"pads:\n  PA00:\n");
        assert_eq!(a, b);
    }

    #[test]
    fn different_bytes_differ() {
        let a = ContentHash::from_bytes(b"PA00");
        let b = ContentHash::from_bytes(b"PA01");
        assert_ne!(a, b);
    }

    #[test]
    fn structural_hash_matches_equal_values() {
        let a = vec![("1".to_string(), "PA00".to_string())];
        let b = vec![("1".to_string(), "PA00".to_string())];
        assert_eq!(ContentHash::of(&a), ContentHash::of(&b));
    }

    #[test]
    fn structural_hash_is_order_sensitive() {
        let a = vec!["PA00", "PA01"];
        let b = vec!["PA01", "PA00"];
        assert_ne!(ContentHash::of(&a), ContentHash::of(&b));
    }

    #[test]
    fn display_format() {
        let h = ContentHash::from_bytes(b"test");
        let s = format!("{h}");
        assert_eq!(s.len(), 32, "Display should be 32 hex chars");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn serde_roundtrip() {
        let h = ContentHash::from_bytes(b"serde test");
        let json = serde_json::to_string(&h).unwrap();
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
