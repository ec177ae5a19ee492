//! # Map-Copy Bench
//!
//! Times copying a string mapping into a synchronized map and a plain map,
//! unlocked and under an outer exclusive lock, and prints tab-separated
//! tables to stdout.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (stderr only)
//! 2. Build the runtime with the fixed run shape
//! 3. Warm up, then print the sampled tables
//!
//! Takes no arguments. `MC_LOG_LEVEL` / `RUST_LOG` tune diagnostics on
//! stderr and nothing else.

use std::io;

use anyhow::{Context, Result};
use tracing::info;

use bench_runtime::BenchRuntime;
use mc_copy_harness::HarnessConfig;
use mc_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize logging")?;

    let config = HarnessConfig::default();
    info!(
        warmup_size = config.warmup_size,
        sample_size = config.sample_size,
        samples = config.samples,
        "Starting map-copy benchmark"
    );

    let runtime = BenchRuntime::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.run(&mut out)
}
