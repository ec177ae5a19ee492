//! # MC Telemetry
//!
//! Logging setup for the map-copy benchmark.
//!
//! The benchmark table is the program's stdout and must stay byte-exact,
//! so every log line goes to stderr.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // Benchmark runs here; logs go to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MC_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `MC_JSON_LOGS` | `false` | Emit JSON lines instead of plain text |
//!
//! Neither variable changes what is benchmarked or what is printed to stdout.

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::LoggingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Install the global tracing subscriber.
///
/// Returns a guard that logs shutdown when dropped; hold it for the
/// lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    logging::init_logging(&config)
}
