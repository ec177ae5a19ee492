//! Exclusive lock scoped to a single destination.
//!
//! The locked timing phase wraps its destination in a [`Monitor`] and runs
//! the copy while holding the monitor's lock. The lock is re-entrant, so a
//! copy that takes it again on the same thread does not block itself, and
//! the guard is released on every exit path, unwinding included.
//!
//! The monitor's lock is its own, separate from any lock inside the value.
//! Holding it does not make a [`SyncMap`](super::SyncMap)'s per-insert
//! locking any cheaper: every insert still takes and releases the map's
//! internal mutex.

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

pub struct Monitor<T> {
    lock: ReentrantMutex<()>,
    value: T,
}

impl<T> Monitor<T> {
    pub fn new(value: T) -> Self {
        Self {
            lock: ReentrantMutex::new(()),
            value,
        }
    }

    /// Run `f` on the guarded value while holding the lock.
    pub fn with_lock<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let _guard = self.lock.lock();
        f(&mut self.value)
    }

    /// Take the lock without touching the value.
    pub fn hold(&self) -> ReentrantMutexGuard<'_, ()> {
        self.lock.lock()
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SyncMap;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_lock_held_only_inside_scope() {
        let mut monitor = Monitor::new(Vec::<u32>::new());
        assert!(!monitor.is_locked());

        monitor.with_lock(|v| v.push(1));

        assert!(!monitor.is_locked(), "Lock must be released after the scope");
        assert_eq!(monitor.get(), &vec![1]);
    }

    #[test]
    fn test_same_thread_reacquire_does_not_block() {
        let monitor = Monitor::new(());

        let outer = monitor.hold();
        let inner = monitor.hold();
        assert!(monitor.is_locked());
        drop(inner);
        assert!(monitor.is_locked(), "Outer guard still held");
        drop(outer);

        assert!(!monitor.is_locked());
    }

    #[test]
    fn test_lock_released_when_body_panics() {
        let mut monitor = Monitor::new(0u64);

        let result = catch_unwind(AssertUnwindSafe(|| {
            monitor.with_lock(|n| {
                *n += 1;
                panic!("copy failed mid-way");
            })
        }));

        assert!(result.is_err());
        assert!(!monitor.is_locked(), "Unwinding must release the lock");
        assert_eq!(monitor.into_inner(), 1);
    }
    #[test]
    fn test_inner_map_lock_independent_of_monitor() {
        let monitor = Monitor::new(SyncMap::new());

        let guard = monitor.hold();
        monitor.get().set_property("1", "1");
        monitor.get().put("2".to_string(), "2".to_string());
        assert!(monitor.is_locked(), "Inserts leave the monitor held");
        drop(guard);

        assert!(!monitor.is_locked());
        assert_eq!(monitor.get().len(), 2);
        assert_eq!(monitor.into_inner().get_property("2").as_deref(), Some("2"));
    }
}
