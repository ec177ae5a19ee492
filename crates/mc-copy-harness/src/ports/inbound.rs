//! Inbound Ports (Driving Ports)
//!
//! The API a process entry point uses to run the harness.

use std::io::Write;

use crate::domain::{Measurement, TimedCopy};
use crate::error::HarnessError;

/// Primary harness API (Driving Port)
pub trait HarnessApi {
    /// Entries in the source mapping every case copies
    fn source_size(&self) -> usize;

    /// Case names in registration (= print) order
    fn case_names(&self) -> Vec<&'static str>;

    /// Time one case: a fresh destination unlocked, then a fresh destination
    /// with its monitor held around the copy.
    fn run_one(&self, case: &dyn TimedCopy) -> Result<Measurement, HarnessError>;

    /// Print the header row, then one row per case in registration order.
    ///
    /// # Errors
    /// Fails on the first sink write error or, with verification enabled,
    /// on the first destination that does not match the source. Either is
    /// fatal for the run.
    fn run_all(&self, out: &mut dyn Write) -> Result<(), HarnessError>;
}
