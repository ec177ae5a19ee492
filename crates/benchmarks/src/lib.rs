//! Benchmark utilities for the map-copy catalog
pub mod utils {
    use mc_copy_harness::SourceMapping;

    /// Source sizes the criterion groups sweep over.
    pub const SOURCE_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

    pub fn sources() -> Vec<SourceMapping> {
        SOURCE_SIZES
            .iter()
            .map(|&size| SourceMapping::with_size(size))
            .collect()
    }
}
