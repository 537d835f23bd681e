//! Hash function families and the primitives they are built from.
pub mod flawed;
pub mod key;
pub mod mod_prime;
pub mod primes;
pub mod universal;

pub use key::{Hashed, KeyImage};
pub use universal::{UniversalHasher, UniversalState};
