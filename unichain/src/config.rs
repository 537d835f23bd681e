//! Construction parameters of [`ChainedMap`](crate::chained::ChainedMap).
use crate::error::UnichainError;
use crate::hashing::primes::is_prime;

/// Default number of buckets of a new table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Default prime modulus of the first hash function.
pub const DEFAULT_INITIAL_PRIME: u64 = 101;

/// Default load factor above which the table grows.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.7;

/// Parameters a table is constructed with.
///
/// # Examples
///
/// ```rust
/// use unichain::TableConfig;
///
/// let config = TableConfig::default()
///     .with_initial_capacity(5)
///     .with_initial_prime(11)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
///
/// let config = TableConfig::default().with_initial_prime(12);
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Number of buckets the table starts with.
    pub initial_capacity: usize,
    /// Prime modulus of the first hash function. Must be `>= initial_capacity`.
    pub initial_prime: u64,
    /// Maximum ratio of elements to buckets. Must lie in `(0, 1]`.
    pub load_factor_threshold: f64,
    /// Seed for the source of hash function parameters. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            initial_prime: DEFAULT_INITIAL_PRIME,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_initial_prime(mut self, initial_prime: u64) -> Self {
        self.initial_prime = initial_prime;
        self
    }

    pub fn with_load_factor_threshold(mut self, load_factor_threshold: f64) -> Self {
        self.load_factor_threshold = load_factor_threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters against the preconditions of the table.
    pub fn validate(&self) -> Result<(), UnichainError> {
        if self.initial_capacity == 0 {
            return Err(UnichainError::ZeroCapacity);
        }
        if !is_prime(self.initial_prime) {
            return Err(UnichainError::NotPrime(self.initial_prime));
        }
        if (self.initial_prime as u128) < self.initial_capacity as u128 {
            return Err(UnichainError::PrimeBelowCapacity {
                prime: self.initial_prime,
                capacity: self.initial_capacity,
            });
        }
        let threshold = self.load_factor_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(UnichainError::InvalidLoadFactor(threshold));
        }
        Ok(())
    }
}
