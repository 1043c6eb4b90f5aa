use spl_math::uint::U256;

/// 10^18, the scale of every normalised balance, weight and grace value.
pub const D18: u128 = 1_000_000_000_000_000_000;

pub const D18_U256: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Bassets can't be more precise than the normalised unit.
pub const MAX_DECIMALS: u8 = 18;

pub const MAX_BASSETS: usize = 16;

/// A weight of 100%, in D18.
pub const FULL_WEIGHT: u128 = D18;

/// One percent expressed as a D18 weight.
pub const ONE_PERCENT_WEIGHT: u128 = D18 / 100;

