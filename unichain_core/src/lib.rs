//! Declarations shared between the `unichain` crates.
pub mod error;

pub use error::UnichainError;
