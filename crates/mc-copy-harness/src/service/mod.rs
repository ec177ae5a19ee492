//! Service Layer - Orchestration

pub mod runner;

pub use runner::BenchmarkRunner;
