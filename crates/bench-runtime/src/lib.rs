//! # Bench Runtime Library
//!
//! Drives the harness through its fixed run shape. The `map-copy-bench`
//! binary in `main.rs` is a thin wrapper around [`BenchRuntime::run`].
//!
//! ## Run Sequence
//!
//! 1. Print `Warming up (ignore) ...`
//! 2. Print one table over the warm-up source (100 entries by default)
//! 3. Build the sample source (10,000,000 entries by default)
//! 4. For each sample `i`: print `Sampling test <i>`, then one table
//!
//! Any error is fatal: the run stops at the first failure and the error
//! propagates to the caller.

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use mc_copy_harness::{BenchmarkRunner, HarnessApi, HarnessConfig, Metrics, MetricsSnapshot};

pub const WARMUP_BANNER: &str = "Warming up (ignore) ...";

pub fn sampling_banner(index: usize) -> String {
    format!("Sampling test {}", index)
}

/// The benchmark process, minus logging setup.
pub struct BenchRuntime {
    config: HarnessConfig,
    metrics: Arc<Metrics>,
}

impl BenchRuntime {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate().context("Invalid harness configuration")?;
        Ok(Self {
            config,
            metrics: Arc::new(Metrics::new()),
        })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Warm-up followed by every sampled table.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        let started = Instant::now();

        self.warm_up(out)?;
        self.sample(out)?;

        let snapshot = self.metrics.snapshot();
        info!(
            tables = snapshot.tables_completed,
            rows = snapshot.rows_printed,
            cases = snapshot.cases_measured,
            entries_copied = snapshot.entries_copied,
            locked_overhead_ratio = snapshot.locked_overhead_ratio(),
            elapsed_secs = started.elapsed().as_secs(),
            "Benchmark finished"
        );
        Ok(())
    }

    /// One table over the warm-up source. Its numbers are meant to be ignored.
    pub fn warm_up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", WARMUP_BANNER)?;

        let runner = self.runner(self.config.warmup_size)?;
        runner.run_all(out).context("Warm-up table failed")?;
        Ok(())
    }

    /// `samples` tables over one shared sample source.
    pub fn sample(&self, out: &mut dyn Write) -> Result<()> {
        let runner = self.runner(self.config.sample_size)?;

        for i in 0..self.config.samples {
            writeln!(out, "{}", sampling_banner(i))?;
            runner
                .run_all(out)
                .with_context(|| format!("Sampling test {} failed", i))?;
        }
        Ok(())
    }

    fn runner(&self, size: usize) -> Result<BenchmarkRunner<Metrics>> {
        info!(size, "Building source mapping");
        let runner = BenchmarkRunner::with_metrics(size, Arc::clone(&self.metrics))
            .context("Failed to register benchmark cases")?
            .verify_copies(self.config.verify_copies);
        Ok(runner)
    }
}
