//! Implements the operations of [`ChainedMap`].
use super::core::empty_buckets;
use crate::chained::ChainedMap;
use crate::core::{HashMap, Hasher};
use crate::error::UnichainError;
use crate::hashing::primes::next_prime;
use rand::RngCore;
use std::borrow::Borrow;

impl<K, V, H> ChainedMap<K, V, H>
where
    K: Eq,
    H: Hasher<K>,
{
    /// Associates `value` with `key`.
    ///
    /// If the table already holds an entry equal to `key` its value is replaced in place and
    /// nothing else changes. Otherwise the entry is appended to the end of its chain and, if the
    /// load factor now exceeds the threshold, the table grows.
    ///
    /// # Errors
    ///
    /// - [`UnichainError::CapacityOverflow`] or [`UnichainError::PrimeSearchOverflow`] if the
    ///   table can't grow any further. The entry stays inserted and the table stays consistent.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), UnichainError> {
        let bucket_idx = self.hasher.hash(&key) as usize;
        let chain = &mut self.buckets[bucket_idx];

        if let Some(entry) = chain.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return Ok(());
        }

        chain.push((key, value));
        self.len += 1;

        while self.exceeds_threshold() {
            self.resize()?;
        }
        Ok(())
    }

    /// Inserts every pair of `iter`, stopping at the first error.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), UnichainError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        iter.into_iter().try_for_each(|(k, v)| self.insert(k, v))
    }

    /// Returns the value associated with `key`, or `None` if there is none.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: Hasher<Q>,
    {
        let bucket_idx = <H as Hasher<Q>>::hash(&self.hasher, key) as usize;
        self.buckets[bucket_idx]
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: Hasher<Q>,
    {
        let bucket_idx = <H as Hasher<Q>>::hash(&self.hasher, key) as usize;
        self.buckets[bucket_idx]
            .iter_mut()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: Hasher<Q>,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Removing an absent key is a no-op returning `None`. The order of the remaining entries of
    /// the chain is preserved, and the table never shrinks.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: Hasher<Q>,
    {
        let bucket_idx = <H as Hasher<Q>>::hash(&self.hasher, key) as usize;
        let chain = &mut self.buckets[bucket_idx];
        let pos = chain.iter().position(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)?;
        let (_, value) = chain.remove(pos);
        self.len -= 1;
        Some(value)
    }

    /// Removes all entries, keeping the capacity and the current hash function.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    #[inline]
    fn exceeds_threshold(&self) -> bool {
        self.len as f64 / self.buckets.len() as f64 > self.load_factor_threshold
    }

    /// Grows the table and rehashes every entry with a freshly drawn hash function.
    ///
    /// The new capacity is the smallest prime `>= 2 * capacity`, the new modulus the smallest
    /// prime `>= 2 * prime`. Everything fallible is computed before the table is touched, so a
    /// failed resize leaves it as it was.
    fn resize(&mut self) -> Result<(), UnichainError> {
        let doubled_capacity = self
            .buckets
            .len()
            .checked_mul(2)
            .ok_or(UnichainError::CapacityOverflow)?;
        let new_capacity = next_prime(doubled_capacity as u64)?;
        let new_capacity =
            usize::try_from(new_capacity).map_err(|_| UnichainError::CapacityOverflow)?;
        let doubled_prime = self
            .prime
            .checked_mul(2)
            .ok_or(UnichainError::PrimeSearchOverflow(self.prime))?;
        let new_prime = next_prime(doubled_prime)?;

        let hasher = H::from_seed(self.rng.next_u64(), new_capacity as u64, new_prime);
        let mut buckets = empty_buckets(new_capacity);

        let old_buckets = std::mem::replace(&mut self.buckets, Box::default());
        // Keys are already unique, so re-inserting is a plain append to the new chain.
        for (key, value) in old_buckets.into_vec().into_iter().flatten() {
            let bucket_idx = hasher.hash(&key) as usize;
            buckets[bucket_idx].push((key, value));
        }

        self.hasher = hasher;
        self.buckets = buckets;
        self.prime = new_prime;
        self.resize_count += 1;
        Ok(())
    }
}

impl<K, V, H> ChainedMap<K, V, H> {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The prime the current hash function works modulo.
    #[inline]
    pub fn prime(&self) -> u64 {
        self.prime
    }

    #[inline]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// The hash function currently mapping keys to buckets.
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// How many times the table has grown since construction.
    #[inline]
    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Number of entries sharing a bucket with an entry before them.
    pub fn num_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|chain| chain.len().saturating_sub(1))
            .sum()
    }

    /// Iterates over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }
}

impl<K: Eq, V, H: Hasher<K>> HashMap<K, V> for ChainedMap<K, V, H> {
    fn get(&self, key: &K) -> Option<&V> {
        ChainedMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), UnichainError> {
        ChainedMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ChainedMap::remove(self, key)
    }

    fn len(&self) -> usize {
        ChainedMap::len(self)
    }

    fn is_empty(&self) -> bool {
        ChainedMap::is_empty(self)
    }

    fn load_factor(&self) -> f64 {
        ChainedMap::load_factor(self)
    }

    fn num_collisions(&self) -> usize {
        ChainedMap::num_collisions(self)
    }
}
