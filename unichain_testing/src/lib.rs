#![allow(dead_code)]

pub mod stat;
pub use stat::*;

pub mod generate;
pub use generate::*;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Creates a reproducible random number generator for tests.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
