//! Harness configuration and validation
//!
//! The defaults are the fixed run shape of the `map-copy-bench` binary:
//! a 100-entry warm-up table, then 100 tables over 10,000,000 entries.
//!
//! # Example
//!
//! ```ignore
//! use mc_copy_harness::HarnessConfigBuilder;
//!
//! let config = HarnessConfigBuilder::new()
//!     .sample_size(10_000)
//!     .samples(3)
//!     .verify_copies(true)
//!     .build()?;
//! ```

use crate::error::HarnessError;

/// Entries in the warm-up source mapping
pub const DEFAULT_WARMUP_SIZE: usize = 100;
/// Entries in the sampled source mapping
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000_000;
/// Tables printed after warm-up
pub const DEFAULT_SAMPLES: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Source size of the warm-up table (its output is printed but ignored)
    pub warmup_size: usize,
    /// Source size of every sampled table
    pub sample_size: usize,
    /// Number of sampled tables
    pub samples: usize,
    /// Check every destination against the source after its timed copy
    pub verify_copies: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup_size: DEFAULT_WARMUP_SIZE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            samples: DEFAULT_SAMPLES,
            verify_copies: false,
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::InvalidConfig(
                "samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for HarnessConfig with validation
#[derive(Default)]
pub struct HarnessConfigBuilder {
    warmup_size: Option<usize>,
    sample_size: Option<usize>,
    samples: Option<usize>,
    verify_copies: Option<bool>,
}

impl HarnessConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warmup_size(mut self, size: usize) -> Self {
        self.warmup_size = Some(size);
        self
    }

    pub fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    pub fn verify_copies(mut self, verify: bool) -> Self {
        self.verify_copies = Some(verify);
        self
    }

    /// Build the HarnessConfig, validating all parameters
    pub fn build(self) -> Result<HarnessConfig, HarnessError> {
        let defaults = HarnessConfig::default();

        let config = HarnessConfig {
            warmup_size: self.warmup_size.unwrap_or(defaults.warmup_size),
            sample_size: self.sample_size.unwrap_or(defaults.sample_size),
            samples: self.samples.unwrap_or(defaults.samples),
            verify_copies: self.verify_copies.unwrap_or(defaults.verify_copies),
        };

        config.validate()?;
        Ok(config)
    }
}
