//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnichainError {
    /// A table must have at least one bucket.
    #[error("Capacity must be at least 1.")]
    ZeroCapacity,

    /// A value required to be prime is not.
    #[error("{0} is not a prime number.")]
    NotPrime(u64),

    /// The modulus prime of the hash function must not be smaller than the number of buckets.
    #[error("Prime {prime} is smaller than capacity {capacity}.")]
    PrimeBelowCapacity { prime: u64, capacity: usize },

    /// Load factor threshold must lie in `(0, 1]`.
    #[error("Load factor threshold {0} is outside of (0, 1].")]
    InvalidLoadFactor(f64),

    /// Might occur while searching for a prime and means that `u64` has been exhausted before
    /// one was found.
    #[error("No prime >= {0} is representable as u64.")]
    PrimeSearchOverflow(u64),

    /// Growing the bucket array would overflow `usize`.
    #[error("Capacity overflow while growing the table.")]
    CapacityOverflow,
}
