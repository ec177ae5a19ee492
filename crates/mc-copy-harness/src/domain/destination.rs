//! Destination containers
//!
//! Two implementations receive the copies:
//!
//! - [`SyncMap`]: every mutating call takes an internal lock. It carries a
//!   setter-style insert (`set_property`, borrowed strings, copies them
//!   itself) next to the generic insert (`put`, takes owned strings).
//! - [`PlainMap`]: `std::collections::HashMap` with no internal locking.

use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;

use super::source::SourceMapping;

/// Which destination family a case writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    /// Internally locked map with setter-style and generic inserts
    Synchronized,
    /// Map without internal locking
    Plain,
}

impl DestinationKind {
    pub fn label(&self) -> &'static str {
        match self {
            DestinationKind::Synchronized => "SyncMap",
            DestinationKind::Plain => "PlainMap",
        }
    }
}

/// Common surface of every destination a case can copy into.
pub trait Destination: Send + 'static {
    /// Destination family, part of a case's identity
    const KIND: DestinationKind;

    /// Generic insert, returning the previous value for the key
    fn put(&mut self, key: String, value: String) -> Option<String>;

    /// Bulk merge of every source entry
    fn put_all(&mut self, source: &SourceMapping);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy of the value stored under `key`
    fn get_cloned(&self, key: &str) -> Option<String>;

    /// Ordered copy of all entries, for equality checks
    fn snapshot(&self) -> BTreeMap<String, String>;
}

/// Map whose operations are guarded by an internal lock.
#[derive(Debug, Default)]
pub struct SyncMap {
    table: Mutex<HashMap<String, String>>,
}

impl SyncMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setter-style insert taking borrowed strings.
    pub fn set_property(&self, key: &str, value: &str) -> Option<String> {
        self.table.lock().insert(key.to_owned(), value.to_owned())
    }

    /// Generic insert taking owned strings.
    pub fn put(&self, key: String, value: String) -> Option<String> {
        self.table.lock().insert(key, value)
    }

    /// Bulk merge under a single lock acquisition.
    pub fn put_all(&self, source: &SourceMapping) {
        let mut table = self.table.lock();
        table.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn get_property(&self, key: &str) -> Option<String> {
        self.table.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }
}

impl Destination for SyncMap {
    const KIND: DestinationKind = DestinationKind::Synchronized;

    fn put(&mut self, key: String, value: String) -> Option<String> {
        SyncMap::put(self, key, value)
    }

    fn put_all(&mut self, source: &SourceMapping) {
        SyncMap::put_all(self, source)
    }

    fn len(&self) -> usize {
        SyncMap::len(self)
    }

    fn get_cloned(&self, key: &str) -> Option<String> {
        self.get_property(key)
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.table
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Map without internal locking.
pub type PlainMap = HashMap<String, String>;

impl Destination for PlainMap {
    const KIND: DestinationKind = DestinationKind::Plain;

    fn put(&mut self, key: String, value: String) -> Option<String> {
        self.insert(key, value)
    }

    fn put_all(&mut self, source: &SourceMapping) {
        self.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get_cloned(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_map_setter_and_put_share_storage() {
        let map = SyncMap::new();

        assert_eq!(map.set_property("a", "1"), None);
        assert_eq!(map.put("a".to_string(), "2".to_string()), Some("1".to_string()));
        assert_eq!(map.get_property("a"), Some("2".to_string()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_sync_map_put_all_copies_source() {
        let source = SourceMapping::with_size(10);
        let map = SyncMap::new();

        map.put_all(&source);

        assert_eq!(map.len(), 10);
        assert_eq!(map.get_property("7"), Some("7".to_string()));
    }

    #[test]
    fn test_plain_map_destination_surface() {
        let source = SourceMapping::with_size(5);
        let mut map = PlainMap::new();

        assert!(Destination::is_empty(&map));
        Destination::put_all(&mut map, &source);

        assert_eq!(Destination::len(&map), 5);
        assert_eq!(map.get_cloned("4"), Some("4".to_string()));
        assert_eq!(map.get_cloned("5"), None);
    }

    #[test]
    fn test_snapshots_are_ordered_and_equal() {
        let source = SourceMapping::with_size(12);
        let mut sync = SyncMap::new();
        let mut plain = PlainMap::new();

        Destination::put_all(&mut sync, &source);
        Destination::put_all(&mut plain, &source);

        let keys: Vec<_> = sync.snapshot().into_keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "Snapshot must iterate in key order");
        assert_eq!(sync.snapshot(), plain.snapshot());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(<SyncMap as Destination>::KIND.label(), "SyncMap");
        assert_eq!(<PlainMap as Destination>::KIND.label(), "PlainMap");
    }
}
