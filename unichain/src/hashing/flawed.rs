//! Implements an intentionally flawed hasher - mainly to serve as a negative example for the
//! tests of the table under adversarial keys.
use crate::core::Hasher;
use crate::hashing::key::KeyImage;

/// Fixed hash function `h(k) = (k mod p) mod m` that ignores its seed.
///
/// An adversary knowing `m` can pick keys that all land in one bucket, no matter how often the
/// table is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuloHasher {
    state: (u64, u64),
}

impl<K: KeyImage + ?Sized> Hasher<K> for ModuloHasher {
    type State = (u64, u64);

    fn from_seed(_seed: u64, num_buckets: u64, prime: u64) -> Self {
        debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);
        Self {
            state: (num_buckets, prime),
        }
    }
    fn from_state(state: (u64, u64)) -> Self {
        Self { state }
    }
    fn state(&self) -> &Self::State {
        &self.state
    }
    fn num_buckets(&self) -> u64 {
        self.state.0
    }
    fn prime(&self) -> u64 {
        self.state.1
    }
    fn hash(&self, value: &K) -> u64 {
        value.residue(self.state.1) % self.state.0
    }
}
