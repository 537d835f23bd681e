//! Declares core types for [`ChainedMap`].
use crate::hashing::UniversalHasher;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt::{Debug, Formatter};

/// An entry of a chain.
pub type Entry<K, V> = (K, V);

/// A bucket's sequence of entries in insertion order.
pub type Chain<K, V> = Vec<Entry<K, V>>;

/// Mutable hash table with separate chaining and a randomized hash function.
///
/// # Guarantees
///
/// - Expected O(1) time for insertions, lookups and removals regardless of which keys are
///   inserted, because a new hash function is drawn at random on every growth.
/// - Immediately after an insertion, `len() / capacity() <= load_factor_threshold()`.
/// - No shrinking: removals never change the capacity.
///
/// # Examples
///
/// ```rust
/// use unichain::{ChainedMap, TableConfig};
///
/// let mut map: ChainedMap<String, i32> = ChainedMap::new(
///     TableConfig::default()
///         .with_initial_capacity(5)
///         .with_initial_prime(11),
/// )
/// .unwrap();
///
/// for i in 0..20 {
///     map.insert(format!("key{}", i), i).unwrap();
/// }
/// assert_eq!(map.len(), 20);
/// assert!(map.capacity() > 5);
/// assert_eq!(map.get("key10"), Some(&10));
/// assert_eq!(map.get("nonexistent_key"), None);
///
/// assert_eq!(map.remove("key10"), Some(10));
/// assert_eq!(map.remove("key10"), None);
/// assert_eq!(map.len(), 19);
/// ```
pub struct ChainedMap<K, V, H = UniversalHasher> {
    pub(super) hasher: H,
    pub(super) buckets: Box<[Chain<K, V>]>,
    pub(super) len: usize,
    pub(super) prime: u64,
    pub(super) load_factor_threshold: f64,
    pub(super) rng: Xoshiro256PlusPlus,
    pub(super) resize_count: usize,
}

impl<K, V, H> Debug for ChainedMap<K, V, H>
where
    K: Debug,
    V: Debug,
    H: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedMap")
            .field("hasher", &self.hasher)
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("prime", &self.prime)
            .field("load_factor_threshold", &self.load_factor_threshold)
            .field("resize_count", &self.resize_count)
            .finish()
    }
}

/// Allocates `capacity` empty chains.
pub(super) fn empty_buckets<K, V>(capacity: usize) -> Box<[Chain<K, V>]> {
    (0..capacity).map(|_| Vec::new()).collect()
}
