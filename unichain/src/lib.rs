//! A chained hash table that keeps expected O(1) operations under adversarial key sequences by
//! drawing a fresh member of a universal hash function family every time it grows.
pub mod chained;
pub mod config;
pub mod core;
pub mod hashing;
#[cfg(test)]
pub mod testing;

pub use unichain_core::error;

pub use chained::ChainedMap;
pub use config::TableConfig;
pub use error::UnichainError;
pub use hashing::{Hashed, KeyImage, UniversalHasher};
