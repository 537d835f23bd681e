//! Implements [`Hasher`] for the multiply-mod-prime family with randomly drawn parameters.
use crate::core::Hasher;
use crate::error::UnichainError;
use crate::hashing::key::KeyImage;
use crate::hashing::mod_prime::mod_prime;
use crate::hashing::primes::is_prime;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Parameters of a single member of the family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalState {
    num_buckets: u64,
    prime: u64,
    a: u64,
    b: u64,
}

impl UniversalState {
    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }
}

#[inline]
fn make_state<R: Rng>(rng: &mut R, num_buckets: u64, prime: u64) -> UniversalState {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);
    debug_assert!(is_prime(prime), r#""prime" must be a prime number"#);

    UniversalState {
        num_buckets,
        prime,
        a: rng.random_range(1..prime),
        b: rng.random_range(0..prime),
    }
}

/// Hasher computing `h(k) = ((a * k + b) mod p) mod m` for a key image `k`.
///
/// `a` and `b` are drawn uniformly at random once, at construction, and never change. A table
/// must create a new hasher whenever its number of buckets changes: re-reducing the old
/// parameters modulo a new `m` would leave keys chosen against them colliding as before.
///
/// # Examples
///
/// ```rust
/// use unichain::UniversalHasher;
///
/// let hasher = UniversalHasher::from_seed(7, 10, 101);
/// let bucket = hasher.hash("key10");
/// assert!(bucket < 10);
/// assert_eq!(bucket, hasher.hash(&String::from("key10")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalHasher {
    state: UniversalState,
}

impl UniversalHasher {
    /// Creates a hasher with parameters drawn from the thread-local random number generator.
    ///
    /// `num_buckets` must be positive and `prime` must be a prime number.
    pub fn new(num_buckets: u64, prime: u64) -> Self {
        Self::from_rng(&mut rand::rng(), num_buckets, prime)
    }

    /// Like [`UniversalHasher::new`], but checks the preconditions.
    pub fn try_new(num_buckets: u64, prime: u64) -> Result<Self, UnichainError> {
        if num_buckets == 0 {
            return Err(UnichainError::ZeroCapacity);
        }
        if !is_prime(prime) {
            return Err(UnichainError::NotPrime(prime));
        }
        Ok(Self::new(num_buckets, prime))
    }

    /// Creates a hasher with parameters drawn from a generator seeded with `seed`.
    pub fn from_seed(seed: u64, num_buckets: u64, prime: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self::from_rng(&mut rng, num_buckets, prime)
    }

    /// Creates a hasher with parameters drawn from `rng`.
    pub fn from_rng<R: Rng>(rng: &mut R, num_buckets: u64, prime: u64) -> Self {
        Self {
            state: make_state(rng, num_buckets, prime),
        }
    }

    #[inline]
    pub fn num_buckets(&self) -> u64 {
        self.state.num_buckets
    }

    #[inline]
    pub fn prime(&self) -> u64 {
        self.state.prime
    }

    /// Maps `key` to a bucket index in `[0, num_buckets)`.
    #[inline]
    pub fn hash<K: KeyImage + ?Sized>(&self, key: &K) -> u64 {
        let state = &self.state;
        mod_prime(
            key.residue(state.prime),
            state.num_buckets,
            state.prime,
            &[state.a, state.b],
        )
    }
}

impl<K: KeyImage + ?Sized> Hasher<K> for UniversalHasher {
    type State = UniversalState;

    fn from_seed(seed: u64, num_buckets: u64, prime: u64) -> Self {
        UniversalHasher::from_seed(seed, num_buckets, prime)
    }
    fn from_state(state: UniversalState) -> Self {
        Self { state }
    }
    fn state(&self) -> &Self::State {
        &self.state
    }
    fn num_buckets(&self) -> u64 {
        self.state.num_buckets
    }
    fn prime(&self) -> u64 {
        self.state.prime
    }
    fn hash(&self, value: &K) -> u64 {
        UniversalHasher::hash(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::primes::next_prime;
    use rand::Rng;
    use unichain_testing::*;

    #[test]
    fn test_parameters_in_range() {
        let mut rng = seeded_rng(10);
        for prime in [2, 3, 11, 101, 1_000_003] {
            for _ in 0..500 {
                let hasher = UniversalHasher::from_rng(&mut rng, 10, prime);
                let state = <UniversalHasher as Hasher<u64>>::state(&hasher);
                assert!((1..prime).contains(&state.a()), "a: {}", state.a());
                assert!(state.b() < prime, "b: {}", state.b());
                assert_eq!(hasher.num_buckets(), 10);
                assert_eq!(hasher.prime(), prime);
            }
        }
    }

    #[test]
    fn test_hash_in_range_for_arbitrary_integers() {
        let mut rng = seeded_rng(11);
        for _ in 0..200 {
            let num_buckets = rng.random_range(1..500_u64);
            let prime = next_prime(num_buckets * 2 + rng.random_range(0..1000)).unwrap();
            let hasher = UniversalHasher::from_rng(&mut rng, num_buckets, prime);
            for _ in 0..50 {
                assert!(hasher.hash(&rng.random::<i64>()) < num_buckets);
                assert!(hasher.hash(&rng.random::<u128>()) < num_buckets);
                assert!(hasher.hash(&rng.random::<i128>()) < num_buckets);
            }
            assert!(hasher.hash(&i64::MIN) < num_buckets);
            assert!(hasher.hash(&-1_i32) < num_buckets);
            assert!(hasher.hash(&u64::MAX) < num_buckets);
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = UniversalHasher::from_seed(12, 97, 1_009);
        let same = UniversalHasher::from_seed(12, 97, 1_009);
        assert_eq!(hasher, same);
        for i in 0..1000_i32 {
            let key = format!("key{}", i);
            assert_eq!(hasher.hash(&key), hasher.hash(key.as_str()));
            assert_eq!(hasher.hash(&key), same.hash(&key));
            assert_eq!(hasher.hash(&i), same.hash(&i));
        }
    }

    #[test]
    fn test_from_state_round_trip() {
        let hasher = UniversalHasher::from_seed(13, 16, 101);
        let state = <UniversalHasher as Hasher<u32>>::state(&hasher).clone();
        let restored = <UniversalHasher as Hasher<u32>>::from_state(state);
        assert_eq!(restored, hasher);
    }

    #[test]
    fn test_try_new_preconditions() {
        assert_eq!(
            UniversalHasher::try_new(0, 11),
            Err(UnichainError::ZeroCapacity)
        );
        assert_eq!(
            UniversalHasher::try_new(5, 12),
            Err(UnichainError::NotPrime(12))
        );
        let hasher = UniversalHasher::try_new(5, 11).unwrap();
        assert_eq!(hasher.num_buckets(), 5);
        assert_eq!(hasher.prime(), 11);
    }

    #[test]
    fn test_different_seeds_draw_different_parameters() {
        let states: std::collections::HashSet<(u64, u64)> = (0..100)
            .map(|seed| {
                let hasher = UniversalHasher::from_seed(seed, 64, 1_000_003);
                let state = <UniversalHasher as Hasher<u64>>::state(&hasher);
                (state.a(), state.b())
            })
            .collect();
        assert!(states.len() > 90, "Only {} distinct parameter pairs", states.len());
    }

    #[test]
    fn test_string_keys_spread_over_buckets() {
        let num_buckets = 32;
        let hasher = UniversalHasher::from_seed(14, num_buckets, 1_000_000_007);
        let hashes = (0..32_000).map(|i| hasher.hash(&format!("key{}", i)) as usize);
        assert_uniform(hashes, num_buckets as usize, 0.0001);
    }
}
