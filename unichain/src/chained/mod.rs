//! Implements [`ChainedMap`] - a separately chained hash table backed by a universal hash
//! function family.
mod core;
mod ctors;
mod display;
mod hash_map;
mod stats;

pub use self::core::*;
pub use display::Buckets;
pub use stats::TableStats;
