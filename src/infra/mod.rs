//! Инфраструктура вокруг движка: RNG-реализации для тестового перемешивания.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
