//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - The source mapping
//! - Destination containers and the `Destination` trait
//! - Copy strategies
//! - Benchmark cases and the fixed catalog
//! - The phase monitor (exclusive lock)
//! - Measurements and table formatting
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No logging below the catalog level

pub mod case;
pub mod catalog;
pub mod config;
pub mod destination;
pub mod format;
pub mod measurement;
pub mod monitor;
pub mod source;
pub mod strategy;

pub use case::{BenchmarkCase, TimedCopy};
pub use catalog::{catalog, plain_map_cases, sync_map_cases, CaseRegistry};
pub use config::{HarnessConfig, HarnessConfigBuilder};
pub use destination::{Destination, DestinationKind, PlainMap, SyncMap};
pub use format::{format_millis, group_thousands, header_row, HEADER};
pub use measurement::Measurement;
pub use monitor::Monitor;
pub use source::SourceMapping;
