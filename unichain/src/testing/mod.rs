#![allow(dead_code)]
pub use unichain_testing::*;

pub mod map;
pub use map::*;
