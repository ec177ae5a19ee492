//! The fixed case catalog
//!
//! Eleven cases, registered in print order:
//!
//! | # | Name | Destination | Visiting | Insert |
//! |---|------|-------------|----------|--------|
//! | 1 | putAll→SyncMap | SyncMap | bulk | bulk |
//! | 2 | forEach→setX→SyncMap | SyncMap | callback | setter |
//! | 3 | stream→setX→SyncMap | SyncMap | iterator chain | setter |
//! | 4 | loop→setX→SyncMap | SyncMap | `for` loop | setter |
//! | 5 | forEach→put→SyncMap | SyncMap | callback | generic |
//! | 6 | stream→put→SyncMap | SyncMap | iterator chain | generic |
//! | 7 | loop→put→SyncMap | SyncMap | `for` loop | generic |
//! | 8 | putAll→PlainMap | PlainMap | bulk | bulk |
//! | 9 | forEach→put→PlainMap | PlainMap | callback | generic |
//! | 10 | stream→put→PlainMap | PlainMap | iterator chain | generic |
//! | 11 | loop→put→PlainMap | PlainMap | `for` loop | generic |

use std::collections::HashSet;

use crate::error::HarnessError;

use super::case::{BenchmarkCase, TimedCopy};
use super::destination::{PlainMap, SyncMap};
use super::strategy;

/// Cases writing into [`SyncMap`], in registration order.
pub fn sync_map_cases() -> Vec<BenchmarkCase<SyncMap>> {
    vec![
        BenchmarkCase::new("putAll→SyncMap", SyncMap::new, strategy::put_all),
        BenchmarkCase::new("forEach→setX→SyncMap", SyncMap::new, strategy::for_each_set),
        BenchmarkCase::new("stream→setX→SyncMap", SyncMap::new, strategy::stream_set),
        BenchmarkCase::new("loop→setX→SyncMap", SyncMap::new, strategy::loop_set),
        BenchmarkCase::new("forEach→put→SyncMap", SyncMap::new, strategy::for_each_put),
        BenchmarkCase::new("stream→put→SyncMap", SyncMap::new, strategy::stream_put),
        BenchmarkCase::new("loop→put→SyncMap", SyncMap::new, strategy::loop_put),
    ]
}

/// Cases writing into [`PlainMap`], in registration order.
pub fn plain_map_cases() -> Vec<BenchmarkCase<PlainMap>> {
    vec![
        BenchmarkCase::new("putAll→PlainMap", PlainMap::new, strategy::put_all),
        BenchmarkCase::new("forEach→put→PlainMap", PlainMap::new, strategy::for_each_put),
        BenchmarkCase::new("stream→put→PlainMap", PlainMap::new, strategy::stream_put),
        BenchmarkCase::new("loop→put→PlainMap", PlainMap::new, strategy::loop_put),
    ]
}

/// The full catalog: synchronized cases first, then plain ones.
pub fn catalog() -> Result<CaseRegistry, HarnessError> {
    let mut registry = CaseRegistry::new();
    for case in sync_map_cases() {
        registry.register(case)?;
    }
    for case in plain_map_cases() {
        registry.register(case)?;
    }
    Ok(registry)
}

/// Insertion-ordered set of cases with unique names.
#[derive(Default)]
pub struct CaseRegistry {
    cases: Vec<Box<dyn TimedCopy>>,
    names: HashSet<&'static str>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case. Names must be unique within the registry.
    pub fn register<C: TimedCopy + 'static>(&mut self, case: C) -> Result<(), HarnessError> {
        if !self.names.insert(case.name()) {
            return Err(HarnessError::DuplicateCase(case.name()));
        }
        self.cases.push(Box::new(case));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.cases.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TimedCopy> + '_ {
        self.cases.iter().map(|c| &**c as &dyn TimedCopy)
    }

    pub fn get(&self, name: &str) -> Option<&dyn TimedCopy> {
        self.iter().find(|c| c.name() == name)
    }
}
