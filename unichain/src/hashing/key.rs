//! Deterministic mapping of keys to integers ("key images").
//!
//! Integers are their own image. Strings and byte sequences are mapped through `xxh3` with a
//! fixed seed, so equal keys have equal images across process runs. Any other key type can be
//! wrapped into [`Hashed`] to derive its image from its [`Hash`] implementation.
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::{xxh3_64, Xxh3};

/// A key that has an integer image usable by modular hash functions.
pub trait KeyImage {
    /// Returns the integer image of the key reduced into `[0, prime)`.
    ///
    /// Negative images are normalized, so the result is never "negative modulo".
    fn residue(&self, prime: u64) -> u64;
}

macro_rules! impl_key_image_unsigned {
    ($($type:ty),*) => {
        $(
            impl KeyImage for $type {
                #[inline]
                fn residue(&self, prime: u64) -> u64 {
                    debug_assert!(prime > 1, r#""prime" must be > 1"#);
                    (*self as u128 % prime as u128) as u64
                }
            }
        )*
    };
}

macro_rules! impl_key_image_signed {
    ($($type:ty),*) => {
        $(
            impl KeyImage for $type {
                #[inline]
                fn residue(&self, prime: u64) -> u64 {
                    debug_assert!(prime > 1, r#""prime" must be > 1"#);
                    (*self as i128).rem_euclid(prime as i128) as u64
                }
            }
        )*
    };
}

impl_key_image_unsigned!(u8, u16, u32, u64, u128, usize);
impl_key_image_signed!(i8, i16, i32, i64, i128, isize);

impl KeyImage for bool {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        u64::from(*self) % prime
    }
}

impl KeyImage for char {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        u64::from(u32::from(*self)) % prime
    }
}

impl KeyImage for [u8] {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        xxh3_64(self) % prime
    }
}

impl KeyImage for Vec<u8> {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        self.as_slice().residue(prime)
    }
}

impl KeyImage for str {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        self.as_bytes().residue(prime)
    }
}

impl KeyImage for String {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        self.as_bytes().residue(prime)
    }
}

impl<T: KeyImage + ?Sized> KeyImage for &T {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        (**self).residue(prime)
    }
}

impl<T: KeyImage + ?Sized> KeyImage for Box<T> {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        (**self).residue(prime)
    }
}

impl<A: Hash, B: Hash> KeyImage for (A, B) {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        hash_image(self) % prime
    }
}

impl<A: Hash, B: Hash, C: Hash> KeyImage for (A, B, C) {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        hash_image(self) % prime
    }
}

/// Feeds `value` into an `xxh3` state with the default seed.
fn hash_image<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut state = Xxh3::new();
    value.hash(&mut state);
    state.finish()
}

/// Wrapper that gives any `Hash + Eq` type a key image.
///
/// # Examples
///
/// ```rust
/// use unichain::{ChainedMap, Hashed};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// let mut map: ChainedMap<Hashed<Color>, &str> = ChainedMap::default();
/// map.insert(Hashed(Color::Red), "#ff0000").unwrap();
/// assert_eq!(map.get(&Hashed(Color::Red)), Some(&"#ff0000"));
/// assert_eq!(map.get(&Hashed(Color::Green)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hashed<T>(pub T);

impl<T> Hashed<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hash> KeyImage for Hashed<T> {
    #[inline]
    fn residue(&self, prime: u64) -> u64 {
        hash_image(&self.0) % prime
    }
}
