//! The source mapping every benchmark case copies from.

use std::collections::hash_map;
use std::collections::HashMap;

/// Key-unique string mapping populated once with `key == value == i`
/// for `i` in `0..size`.
///
/// Immutable after construction. The runner owns it and lends it to every
/// case by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMapping {
    entries: HashMap<String, String>,
}

impl SourceMapping {
    /// Build a mapping with `size` entries.
    pub fn with_size(size: usize) -> Self {
        let mut entries = HashMap::with_capacity(size);
        for i in 0..size {
            let key = i.to_string();
            entries.insert(key.clone(), key);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Lazy iterator over all entries, in the mapping's internal order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Visit every entry through a callback.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &str),
    {
        for (key, value) in &self.entries {
            visit(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a SourceMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
