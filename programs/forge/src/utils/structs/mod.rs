//! Structs for the Forge program. Built by the caller as a snapshot of the basket.
pub mod basket;
pub mod basset;

pub use basket::*;
pub use basset::*;
