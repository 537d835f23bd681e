//! Implementation of the multiply-mod-prime hashing scheme from [Carter & Wegman, 1979].
//!
//! [Carter & Wegman, 1979]: https://doi.org/10.1016/0022-0000(79)90044-8

/// Hashes a value into `[0, num_buckets)` as `((a * x + b) mod p) mod num_buckets`.
///
/// # Parameters
///
/// - `x`: The key image, already reduced into `[0, prime)`.
/// - `num_buckets`: Number of buckets, must be positive.
/// - `prime`: The prime modulus.
/// - `seed`: `[a, b]` with `a` in `[1, prime - 1]` and `b` in `[0, prime - 1]`.
///
/// # Guarantees
///
/// - Universality: for distinct `x` and `y` in `[0, prime)` and `(a, b)` drawn uniformly at
///   random, `x` and `y` collide with probability of roughly `1 / num_buckets`.
#[inline]
pub const fn mod_prime(x: u64, num_buckets: u64, prime: u64, seed: &[u64; 2]) -> u64 {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be > 0"#);
    debug_assert!(
        seed[0] > 0 && seed[0] < prime,
        r#""seed[0]" must be in the range [1, prime - 1]"#,
    );
    debug_assert!(seed[1] < prime, r#""seed[1]" must be in the range [0, prime - 1]"#);

    // a, x, b < 2 ** 64, so a * x + b < 2 ** 128 can't overflow.
    ((seed[0] as u128 * x as u128 + seed[1] as u128) % prime as u128 % num_buckets as u128) as u64
}
