//! Ports Layer - Trait definitions
//!
//! - `inbound`: API the runtime drives the harness through

pub mod inbound;

pub use inbound::HarnessApi;
