//! Benchmark cases
//!
//! A [`BenchmarkCase`] is a plain record: a display name, a constructor for a
//! fresh empty destination, and a copy function. It is generic over the
//! destination type so the copy runs monomorphized; [`TimedCopy`] erases
//! that type once per case so one catalog can hold both destination
//! families.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::error::HarnessError;

use super::destination::{Destination, DestinationKind};
use super::monitor::Monitor;
use super::source::SourceMapping;

pub struct BenchmarkCase<T> {
    name: &'static str,
    make_target: fn() -> T,
    copy_into: fn(&SourceMapping, &mut T),
}

impl<T: Destination> BenchmarkCase<T> {
    pub fn new(
        name: &'static str,
        make_target: fn() -> T,
        copy_into: fn(&SourceMapping, &mut T),
    ) -> Self {
        Self {
            name,
            make_target,
            copy_into,
        }
    }

    pub fn make_target(&self) -> T {
        (self.make_target)()
    }

    pub fn copy_into(&self, source: &SourceMapping, target: &mut T) {
        (self.copy_into)(source, target)
    }

    /// Fresh destination with the source copied in.
    pub fn produce(&self, source: &SourceMapping) -> T {
        let mut target = self.make_target();
        self.copy_into(source, &mut target);
        target
    }
}

/// Type-erased view of a case, as the runner sees it.
pub trait TimedCopy: Send + Sync {
    fn name(&self) -> &'static str;

    fn kind(&self) -> DestinationKind;

    /// Copy into a fresh destination and return the elapsed time of the
    /// copy alone. With `verify`, the destination is checked against the
    /// source after the clock stops.
    fn time_unlocked(&self, source: &SourceMapping, verify: bool)
        -> Result<Duration, HarnessError>;

    /// As [`TimedCopy::time_unlocked`], with the destination's monitor held
    /// around the timed copy.
    fn time_locked(&self, source: &SourceMapping, verify: bool) -> Result<Duration, HarnessError>;

    /// Ordered contents of a fresh destination after one untimed copy.
    fn copy_snapshot(&self, source: &SourceMapping) -> BTreeMap<String, String>;
}

impl<T: Destination> TimedCopy for BenchmarkCase<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> DestinationKind {
        T::KIND
    }

    fn time_unlocked(
        &self,
        source: &SourceMapping,
        verify: bool,
    ) -> Result<Duration, HarnessError> {
        let mut target = self.make_target();

        let start = Instant::now();
        self.copy_into(source, &mut target);
        let elapsed = start.elapsed();

        if verify {
            verify_copy(self.name, source, &target)?;
        }
        Ok(elapsed)
    }

    fn time_locked(&self, source: &SourceMapping, verify: bool) -> Result<Duration, HarnessError> {
        let mut monitor = Monitor::new(self.make_target());

        let elapsed = monitor.with_lock(|target| {
            let start = Instant::now();
            self.copy_into(source, target);
            start.elapsed()
        });

        if verify {
            verify_copy(self.name, source, monitor.get())?;
        }
        Ok(elapsed)
    }

    fn copy_snapshot(&self, source: &SourceMapping) -> BTreeMap<String, String> {
        self.produce(source).snapshot()
    }
}

/// Check that `target` holds exactly the pairs of `source`.
pub fn verify_copy<T: Destination>(
    case: &'static str,
    source: &SourceMapping,
    target: &T,
) -> Result<(), HarnessError> {
    if target.len() != source.len() {
        return Err(HarnessError::CopyMismatch {
            case,
            expected: source.len(),
            actual: target.len(),
        });
    }

    for (key, expected) in source {
        match target.get_cloned(key) {
            None => {
                return Err(HarnessError::MissingEntry {
                    case,
                    key: key.clone(),
                })
            }
            Some(value) if value != *expected => {
                return Err(HarnessError::WrongValue {
                    case,
                    key: key.clone(),
                    value,
                })
            }
            Some(_) => {}
        }
    }

    Ok(())
}
