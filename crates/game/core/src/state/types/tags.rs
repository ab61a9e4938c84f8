//! Per-item key/value tag storage.
//!
//! Tags are the only persisted data a ring carries. The host serializes them
//! alongside the item; the rules read and write individual keys.

use std::collections::BTreeMap;

/// A single tag value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TagValue {
    Int(i32),
    Str(String),
}

/// Opaque key/value storage scoped to one item instance.
///
/// Typed getters return `None` both for missing keys and for keys holding a
/// value of the other type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemTags {
    entries: BTreeMap<String, TagValue>,
}

impl ItemTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(TagValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.entries.get(key) {
            Some(TagValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn set_str(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_owned(), TagValue::Str(value.into()));
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_owned(), TagValue::Int(value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters_ignore_mismatched_values() {
        let mut tags = ItemTags::new();
        tags.set_str("effect", "minecraft:speed");
        tags.set_int("durability", 3);

        assert_eq!(tags.get_str("effect"), Some("minecraft:speed"));
        assert_eq!(tags.get_int("effect"), None);
        assert_eq!(tags.get_int("durability"), Some(3));
        assert_eq!(tags.get_str("durability"), None);
        assert!(!tags.contains("maxDurability"));
    }
}
