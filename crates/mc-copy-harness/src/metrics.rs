//! Metrics hooks for harness runs
//!
//! Counts what the runner did across tables. These are totals for logging,
//! not statistics: no percentiles, no outlier rejection.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use mc_copy_harness::{BenchmarkRunner, Metrics};
//!
//! let metrics = Arc::new(Metrics::new());
//! let runner = BenchmarkRunner::with_metrics(1_000, metrics.clone())?;
//! runner.run_all(&mut std::io::sink())?;
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.tables_completed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Recorder the runner reports into
pub trait MetricsRecorder: Send + Sync {
    /// One case finished both phases over `entries` source entries
    fn record_case(&self, entries: usize, unlocked: Duration, locked: Duration);

    /// One full table was printed
    fn record_table(&self, rows: usize);
}

/// Atomic counters
#[derive(Default)]
pub struct Metrics {
    /// Tables printed
    pub tables_completed: AtomicU64,
    /// Result rows printed across all tables
    pub rows_printed: AtomicU64,
    /// Cases measured (each covers both phases)
    pub cases_measured: AtomicU64,
    /// Source entries copied, counting both phases
    pub entries_copied: AtomicU64,
    /// Cumulative unlocked copy time in nanoseconds
    pub unlocked_time_ns: AtomicU64,
    /// Cumulative locked copy time in nanoseconds
    pub locked_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tables_completed: self.tables_completed.load(Ordering::Relaxed),
            rows_printed: self.rows_printed.load(Ordering::Relaxed),
            cases_measured: self.cases_measured.load(Ordering::Relaxed),
            entries_copied: self.entries_copied.load(Ordering::Relaxed),
            unlocked_time_ns: self.unlocked_time_ns.load(Ordering::Relaxed),
            locked_time_ns: self.locked_time_ns.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.tables_completed.store(0, Ordering::Relaxed);
        self.rows_printed.store(0, Ordering::Relaxed);
        self.cases_measured.store(0, Ordering::Relaxed);
        self.entries_copied.store(0, Ordering::Relaxed);
        self.unlocked_time_ns.store(0, Ordering::Relaxed);
        self.locked_time_ns.store(0, Ordering::Relaxed);
    }
}

impl MetricsRecorder for Metrics {
    fn record_case(&self, entries: usize, unlocked: Duration, locked: Duration) {
        self.cases_measured.fetch_add(1, Ordering::Relaxed);
        self.entries_copied
            .fetch_add(2 * entries as u64, Ordering::Relaxed);
        self.unlocked_time_ns
            .fetch_add(unlocked.as_nanos() as u64, Ordering::Relaxed);
        self.locked_time_ns
            .fetch_add(locked.as_nanos() as u64, Ordering::Relaxed);
    }

    fn record_table(&self, rows: usize) {
        self.tables_completed.fetch_add(1, Ordering::Relaxed);
        self.rows_printed.fetch_add(rows as u64, Ordering::Relaxed);
    }
}

/// Point-in-time copy of the counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub tables_completed: u64,
    pub rows_printed: u64,
    pub cases_measured: u64,
    pub entries_copied: u64,
    pub unlocked_time_ns: u64,
    pub locked_time_ns: u64,
}

impl MetricsSnapshot {
    /// Locked over unlocked total time; 0.0 when nothing was timed.
    pub fn locked_overhead_ratio(&self) -> f64 {
        if self.unlocked_time_ns == 0 {
            0.0
        } else {
            self.locked_time_ns as f64 / self.unlocked_time_ns as f64
        }
    }
}

/// Recorder that drops everything
#[derive(Default, Clone, Copy)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_case(&self, _entries: usize, _unlocked: Duration, _locked: Duration) {}

    fn record_table(&self, _rows: usize) {}
}
