//! Deterministic prime search used to pick bucket counts and hash moduli.
use crate::error::UnichainError;

/// Checks whether `x` is prime by trial division with odd divisors up to `⌊√x⌋`.
pub const fn is_prime(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    if x == 2 || x == 3 {
        return true;
    }
    if x % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    // `divisor <= x / divisor` is `divisor * divisor <= x` without the overflow.
    while divisor <= x / divisor {
        if x % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Finds the smallest prime `>= n`.
///
/// # Errors
///
/// - [`UnichainError::PrimeSearchOverflow`] if there is no such prime representable as `u64`.
///
/// # Examples
///
/// ```rust
/// use unichain::hashing::primes::next_prime;
///
/// assert_eq!(next_prime(10).unwrap(), 11);
/// assert_eq!(next_prime(11).unwrap(), 11);
/// assert_eq!(next_prime(0).unwrap(), 2);
/// ```
pub fn next_prime(n: u64) -> Result<u64, UnichainError> {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate = candidate
            .checked_add(1)
            .ok_or(UnichainError::PrimeSearchOverflow(n))?;
    }
    Ok(candidate)
}
