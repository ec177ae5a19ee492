//! Copy strategies
//!
//! Each function inserts every source entry into the destination. They
//! differ only in how the source is visited and which insert is used:
//!
//! | Strategy | Visiting | Insert |
//! |----------|----------|--------|
//! | `put_all` | bulk merge | destination's own |
//! | `for_each_put` | callback | generic `put` |
//! | `stream_put` | lazy iterator chain | generic `put` |
//! | `loop_put` | `for` loop | generic `put` |
//! | `for_each_set` | callback | `set_property` |
//! | `stream_set` | lazy iterator chain | `set_property` |
//! | `loop_set` | `for` loop | `set_property` |
//!
//! The `*_put` strategies are generic over [`Destination`]; the `*_set`
//! strategies exist only for [`SyncMap`].

use super::destination::{Destination, SyncMap};
use super::source::SourceMapping;

pub fn put_all<D: Destination>(source: &SourceMapping, target: &mut D) {
    target.put_all(source);
}

pub fn for_each_put<D: Destination>(source: &SourceMapping, target: &mut D) {
    source.for_each(|key, value| {
        target.put(key.to_owned(), value.to_owned());
    });
}

pub fn stream_put<D: Destination>(source: &SourceMapping, target: &mut D) {
    source
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .for_each(|(key, value)| {
            target.put(key, value);
        });
}

pub fn loop_put<D: Destination>(source: &SourceMapping, target: &mut D) {
    for (key, value) in source {
        target.put(key.clone(), value.clone());
    }
}

pub fn for_each_set(source: &SourceMapping, target: &mut SyncMap) {
    source.for_each(|key, value| {
        target.set_property(key, value);
    });
}

pub fn stream_set(source: &SourceMapping, target: &mut SyncMap) {
    source.iter().for_each(|(key, value)| {
        target.set_property(key, value);
    });
}

pub fn loop_set(source: &SourceMapping, target: &mut SyncMap) {
    for (key, value) in source {
        target.set_property(key, value);
    }
}
