//! # MC Copy Harness
//!
//! Times copies of a string mapping into a synchronized map and a plain map,
//! with and without an outer exclusive lock held around the whole copy.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `SourceMapping`: The immutable dataset every case copies
//!   - `SyncMap` / `PlainMap`: Destination containers
//!   - `strategy`: Bulk, callback, lazy-sequence and loop copies
//!   - `BenchmarkCase`: Named (constructor, copy) pair
//!   - `CaseRegistry`: Ordered, name-unique case catalog
//!   - `Monitor`: Re-entrant exclusive lock scoped to one destination
//!   - `HarnessConfig` / `HarnessConfigBuilder`: Run parameters
//!
//! - **Ports Layer** (`ports/`): `HarnessApi` driving port
//!
//! - **Service Layer** (`service/`): `BenchmarkRunner` times each case and
//!   prints the table to any `std::io::Write`
//!
//! ## Output
//!
//! ```text
//! Name    Unlocked        Locked
//! putAll→SyncMap  1,204   1,187
//! ...
//! ```
//!
//! ## Invariants
//!
//! - **Equivalence**: every case leaves its destination holding exactly the
//!   source pairs; only timing differs between cases.
//! - **Order**: cases print in registration order on every table.
//! - **Release**: the phase lock is released on every exit path, including
//!   a panicking copy.
//!
//! ## Usage Example
//!
//! ```ignore
//! use mc_copy_harness::BenchmarkRunner;
//!
//! let runner = BenchmarkRunner::new(100)?;
//! let stdout = std::io::stdout();
//! runner.run_all(&mut stdout.lock())?;
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    catalog, format_millis, group_thousands, header_row, BenchmarkCase, CaseRegistry,
    Destination, DestinationKind, HarnessConfig, HarnessConfigBuilder, Measurement, Monitor,
    PlainMap, SourceMapping, SyncMap, TimedCopy, HEADER,
};
pub use error::HarnessError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::HarnessApi;
pub use service::BenchmarkRunner;
