//! Diagnostic views of the bucket layout of [`ChainedMap`].
use crate::chained::core::{Chain, Entry};
use crate::chained::ChainedMap;
use std::fmt::{Debug, Display, Formatter};
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Iterator over `(bucket index, chain)` pairs, created by [`ChainedMap::buckets`].
pub struct Buckets<'a, K, V> {
    inner: Enumerate<slice::Iter<'a, Chain<K, V>>>,
}

impl<'a, K, V> Iterator for Buckets<'a, K, V> {
    type Item = (usize, &'a [Entry<K, V>]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(bucket_idx, chain)| (bucket_idx, chain.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Buckets<'_, K, V> {}

impl<K, V> FusedIterator for Buckets<'_, K, V> {}

impl<K, V, H> ChainedMap<K, V, H> {
    /// Enumerates every bucket with the entries chained in it, in insertion order.
    ///
    /// Meant for inspection only: bucket membership changes completely on every growth.
    pub fn buckets(&self) -> Buckets<'_, K, V> {
        Buckets {
            inner: self.buckets.iter().enumerate(),
        }
    }
}

/// Prints one `Bucket <index>: [<entries>]` line per bucket.
impl<K: Debug, V: Debug, H> Display for ChainedMap<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (bucket_idx, chain) in self.buckets() {
            writeln!(f, "Bucket {}: {:?}", bucket_idx, chain)?;
        }
        Ok(())
    }
}
