//! Error types for the copy harness

use thiserror::Error;

/// Errors that can occur while building or running the harness
///
/// None of these are recoverable by the harness itself; callers treat them
/// as fatal for the run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Failed to write benchmark output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Case {case} copied {actual} entries, expected {expected}")]
    CopyMismatch {
        case: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Case {case} is missing key {key:?}")]
    MissingEntry { case: &'static str, key: String },

    #[error("Case {case} holds {value:?} for key {key:?}")]
    WrongValue {
        case: &'static str,
        key: String,
        value: String,
    },

    #[error("Duplicate case name: {0}")]
    DuplicateCase(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
