//! Benchmark Runner
//!
//! Owns the source mapping and the case catalog, times every case in both
//! phases and prints the table.

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::domain::{catalog, header_row, CaseRegistry, Measurement, SourceMapping, TimedCopy};
use crate::error::HarnessError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::HarnessApi;

/// Runner over one source mapping.
///
/// Single-threaded: cases run one after another on the calling thread, each
/// phase on its own fresh destination.
pub struct BenchmarkRunner<M: MetricsRecorder = NoOpMetrics> {
    source: SourceMapping,
    cases: CaseRegistry,
    verify_copies: bool,
    metrics: Arc<M>,
}

impl BenchmarkRunner<NoOpMetrics> {
    /// Build a source mapping of `size` entries and register the catalog.
    pub fn new(size: usize) -> Result<Self, HarnessError> {
        Self::with_metrics(size, Arc::new(NoOpMetrics))
    }
}

impl<M: MetricsRecorder> BenchmarkRunner<M> {
    pub fn with_metrics(size: usize, metrics: Arc<M>) -> Result<Self, HarnessError> {
        let source = SourceMapping::with_size(size);
        let cases = catalog()?;

        debug!(size, cases = cases.len(), "Benchmark runner constructed");

        Ok(Self {
            source,
            cases,
            verify_copies: false,
            metrics,
        })
    }

    /// Check each destination against the source after its timed copy.
    pub fn verify_copies(mut self, verify: bool) -> Self {
        self.verify_copies = verify;
        self
    }

    pub fn source(&self) -> &SourceMapping {
        &self.source
    }

    pub fn cases(&self) -> &CaseRegistry {
        &self.cases
    }

    /// Print one table and return its rows.
    pub fn run_all_collect(&self, out: &mut dyn Write) -> Result<Vec<Measurement>, HarnessError> {
        let started = Instant::now();

        writeln!(out, "{}", header_row())?;

        let mut rows = Vec::with_capacity(self.cases.len());
        for case in self.cases.iter() {
            let measurement = self.run_one(case)?;
            writeln!(out, "{}", measurement.to_row())?;
            rows.push(measurement);
        }
        out.flush()?;

        self.metrics.record_table(rows.len());
        info!(
            size = self.source.len(),
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Table completed"
        );

        Ok(rows)
    }
}

impl<M: MetricsRecorder> HarnessApi for BenchmarkRunner<M> {
    fn source_size(&self) -> usize {
        self.source.len()
    }

    fn case_names(&self) -> Vec<&'static str> {
        self.cases.names()
    }

    fn run_one(&self, case: &dyn TimedCopy) -> Result<Measurement, HarnessError> {
        let report = |e: HarnessError| {
            error!(case = case.name(), error = %e, "Copy verification failed");
            e
        };

        let unlocked = case
            .time_unlocked(&self.source, self.verify_copies)
            .map_err(report)?;
        let locked = case
            .time_locked(&self.source, self.verify_copies)
            .map_err(report)?;

        self.metrics.record_case(self.source.len(), unlocked, locked);
        debug!(
            case = case.name(),
            unlocked_ms = unlocked.as_millis() as u64,
            locked_ms = locked.as_millis() as u64,
            "Case measured"
        );

        Ok(Measurement {
            case_name: case.name(),
            unlocked,
            locked,
        })
    }

    fn run_all(&self, out: &mut dyn Write) -> Result<(), HarnessError> {
        self.run_all_collect(out).map(|_| ())
    }
}
