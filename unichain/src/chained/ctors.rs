//! Implements constructors for [`ChainedMap`].
use super::core::empty_buckets;
use crate::chained::ChainedMap;
use crate::config::TableConfig;
use crate::core::Hasher;
use crate::error::UnichainError;
use crate::hashing::UniversalHasher;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

impl<K, V, H: Hasher<K>> ChainedMap<K, V, H> {
    /// Creates an empty table from `config`.
    ///
    /// # Errors
    ///
    /// - Whatever [`TableConfig::validate`] rejects.
    pub fn new(config: TableConfig) -> Result<Self, UnichainError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Creates an empty table with `capacity` buckets, a first hash function modulo `prime` and
    /// the given load factor threshold.
    pub fn with_params(
        capacity: usize,
        prime: u64,
        load_factor_threshold: f64,
    ) -> Result<Self, UnichainError> {
        Self::new(
            TableConfig::default()
                .with_initial_capacity(capacity)
                .with_initial_prime(prime)
                .with_load_factor_threshold(load_factor_threshold),
        )
    }

    pub(super) fn from_valid_config(config: TableConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "Invalid config: {:?}", config);

        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_os_rng(),
        };
        let hasher = H::from_seed(
            rng.next_u64(),
            config.initial_capacity as u64,
            config.initial_prime,
        );

        Self {
            hasher,
            buckets: empty_buckets(config.initial_capacity),
            len: 0,
            prime: config.initial_prime,
            load_factor_threshold: config.load_factor_threshold,
            rng,
            resize_count: 0,
        }
    }
}

impl<K, V> Default for ChainedMap<K, V, UniversalHasher>
where
    UniversalHasher: Hasher<K>,
{
    /// Creates an empty table with 10 buckets, prime 101 and load factor threshold 0.7.
    fn default() -> Self {
        Self::from_valid_config(TableConfig::default())
    }
}
