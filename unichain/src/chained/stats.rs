//! Utilization statistics of [`ChainedMap`].
use crate::chained::ChainedMap;

/// A snapshot of the table's shape, useful for debugging and for checking the distribution of
/// keys over buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub len: usize,
    pub capacity: usize,
    pub prime: u64,
    pub load_factor: f64,
    pub load_factor_threshold: f64,
    pub resize_count: usize,
    pub empty_buckets: usize,
    pub longest_chain: usize,
    pub num_collisions: usize,
}

impl<K, V, H> ChainedMap<K, V, H> {
    /// Collects [`TableStats`] by walking all buckets.
    pub fn stats(&self) -> TableStats {
        TableStats {
            len: self.len,
            capacity: self.capacity(),
            prime: self.prime,
            load_factor: self.load_factor(),
            load_factor_threshold: self.load_factor_threshold,
            resize_count: self.resize_count,
            empty_buckets: self.buckets.iter().filter(|chain| chain.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            num_collisions: self.num_collisions(),
        }
    }
}
