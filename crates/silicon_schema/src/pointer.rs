//! JSON pointers (RFC 6901) for locating violations.

use std::fmt;

/// A JSON pointer built up while walking a document.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct JsonPointer(String);

impl JsonPointer {
    /// The pointer to the whole document (the empty string).
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends an object key, escaping `~` and `/`.
    pub fn key(&self, key: &str) -> Self {
        let escaped = key.replace('~', "~0").replace('/', "~1");
        Self(format!("{}/{escaped}", self.0))
    }

    /// Appends an array index.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}/{index}", self.0))
    }

    /// The pointer text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_pointer() {
        let p = JsonPointer::root().key("pads").key("PA00").key("functions").index(2);
        assert_eq!(p.as_str(), "/pads/PA00/functions/2");
        assert_eq!(JsonPointer::root().as_str(), "");
    }

    #[test]
    fn escapes_reserved_characters() {
        let p = JsonPointer::root().key("a/b").key("c~d");
        assert_eq!(p.to_string(), "/a~1b/c~0d");
    }

    #[test]
    fn resolves_with_serde_json() {
        let value = serde_json::json!({"pads": {"A/B": {"type": "input"}}});
        let p = JsonPointer::root().key("pads").key("A/B").key("type");
        assert_eq!(value.pointer(p.as_str()), Some(&serde_json::json!("input")));
    }
}
