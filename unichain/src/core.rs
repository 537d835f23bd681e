//! Core trait declarations for the whole project.
use crate::error::UnichainError;

/// Hasher mapping keys of type `T` to bucket indices.
///
/// Unlike [`core::hash::Hasher`] an instance is a single, already parametrized member of a hash
/// function family: it knows its number of buckets and the prime its arithmetic is done modulo,
/// and it is never mutated after creation.
pub trait Hasher<T: ?Sized>
where
    Self: Sized,
{
    /// State of the hasher instance.
    ///
    /// Usually contains the randomly drawn parameters, the number of buckets and the prime. But
    /// it's up to the implementation to decide what to store in it.
    type State: Clone;

    /// Create a new hasher with a given `seed`, `num_buckets` number of buckets and the modulus
    /// `prime`.
    ///
    /// `num_buckets` must be positive and `prime` must be a prime number.
    fn from_seed(seed: u64, num_buckets: u64, prime: u64) -> Self;

    /// Create a new hasher from the given `state`.
    fn from_state(state: Self::State) -> Self;

    /// Get the state of the hasher.
    fn state(&self) -> &Self::State;

    /// Get the number of buckets (exclusive upper bound of the hash value).
    fn num_buckets(&self) -> u64;

    /// Get the prime the hash arithmetic is performed modulo.
    fn prime(&self) -> u64;

    /// Hash the given `value` into `[0, num_buckets)`.
    fn hash(&self, value: &T) -> u64;
}

/// A mutable hash map.
pub trait HashMap<K: Eq, V> {
    /// Get the value associated with the given `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Associate `value` with `key`, replacing the value of an existing entry in place.
    fn insert(&mut self, key: K, value: V) -> Result<(), UnichainError>;

    /// Remove the entry for `key` if there is one.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Get the number of elements in the map.
    fn len(&self) -> usize;

    /// Check if the map is empty.
    fn is_empty(&self) -> bool;

    /// Get the load factor of the map.
    fn load_factor(&self) -> f64;

    /// Get the number of collisions in the map.
    fn num_collisions(&self) -> usize;
}
