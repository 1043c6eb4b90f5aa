use std::cmp::Ordering;

use crate::constants::{D18_U256, MAX_DECIMALS};
use crate::errors::ErrorCode::{InvalidBassetDecimals, MathOverflow};
use anchor_lang::prelude::*;
use spl_math::uint::U256;

#[derive(Debug, Clone)]
/// Scaled in D18
pub struct Decimal(pub U256);

/// Trait to convert a type to a U256
pub trait IntoU256 {
    fn into_u256(self) -> U256;
}

/// Implementation of the IntoU256 trait for u64
impl IntoU256 for u64 {
    fn into_u256(self) -> U256 {
        U256::from(self)
    }
}

/// Implementation of the IntoU256 trait for u128
impl IntoU256 for u128 {
    fn into_u256(self) -> U256 {
        U256::from(self)
    }
}

/// Implementation of the IntoU256 trait for U256
impl IntoU256 for U256 {
    fn into_u256(self) -> U256 {
        self
    }
}

/// Implementation of the PartialEq trait for Decimal
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Implementation of the Eq trait for Decimal
impl Eq for Decimal {}

/// Implementation of the PartialOrd trait for Decimal
impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

/// Implementation of the Ord trait for Decimal
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Decimal {
    /// The zero decimal
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));
    /// The one scaled in D18 (1e18)
    pub const ONE_E18: Self = Self(D18_U256);
}

impl Decimal {
    /// Create a new Decimal from a plain value, meaning it's not scaled at all. So will scale it in D18.
    ///
    /// # Arguments
    /// * `value` - The plain value to create the Decimal from
    ///
    /// Returns the Decimal in D18
    pub fn from_plain<T: IntoU256>(value: T) -> Result<Self> {
        Ok(Decimal(
            value
                .into_u256()
                .checked_mul(D18_U256)
                .ok_or(MathOverflow)?,
        ))
    }

    /// Create a new Decimal from an amount expressed in the asset's native precision.
    /// A 6 decimals amount is multiplied by 1e12, an 18 decimals amount is kept as is.
    ///
    /// # Arguments
    /// * `value` - The native amount
    /// * `decimals` - The native precision of the asset, at most 18
    ///
    /// Returns the Decimal in D18
    pub fn from_native_amount<T: IntoU256>(value: T, decimals: u8) -> Result<Self> {
        let scale = Self::native_scale(decimals)?;

        let result = value.into_u256().checked_mul(scale).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Create a new Decimal from a scaled value, meaning it's already in D18.
    ///
    /// # Arguments
    /// * `value` - The scaled value to create the Decimal from
    ///
    /// Returns the Decimal in D18
    pub fn from_scaled<T: IntoU256>(value: T) -> Self {
        let result = value.into_u256();

        Decimal(result)
    }

    /// The factor that lifts a native amount to D18.
    fn native_scale(decimals: u8) -> Result<U256> {
        if decimals > MAX_DECIMALS {
            return Err(error!(InvalidBassetDecimals));
        }

        Ok(U256::exp10((MAX_DECIMALS - decimals) as usize))
    }
}

impl Decimal {
    /// Convert a Decimal to its raw scaled value (so in D18), as a u128.
    /// Unlike token amounts, a value that doesn't fit is an error, balances are never saturated.
    ///
    /// Returns the scaled value in D18
    pub fn to_scaled(&self) -> Result<u128> {
        if self.0 > U256::from(u128::MAX) {
            return Err(error!(MathOverflow));
        }

        Ok(self.0.as_u128())
    }
}

impl Decimal {
    /// Add two Decimals.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to add
    ///
    /// Returns the sum of the two Decimals
    pub fn add(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_add(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Subtract two Decimals.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to subtract
    ///
    /// Returns the difference of the two Decimals
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_sub(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Multiply two Decimals.
    /// This multiplication is done from a 1eX multiplied by a 1eY, so the result is a 1e(X+Y). So depending on the scale of the numbers,
    /// the result might be in D18, D36, D54, etc., no automatic scaling back is done.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to multiply
    ///
    /// Returns the product of the two Decimals
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_mul(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Divide two Decimals.
    /// This division is done from a 1eX divided by a 1eY, so the result is a 1e(X-Y). So depending on the scale of the numbers,
    /// the result might be in D18, etc., no automatic scaling back is done.
    ///
    /// # Arguments
    /// * `other` - The other Decimal to divide
    ///
    /// Returns the quotient of the two Decimals
    pub fn div(&self, other: &Self) -> Result<Self> {
        let result = self.0.checked_div(other.0).ok_or(MathOverflow)?;

        Ok(Decimal(result))
    }

    /// Absolute difference between two Decimals.
    ///
    /// # Arguments
    /// * `other` - The Decimal to compare against
    ///
    /// Returns `|self - other|`
    pub fn abs_diff(&self, other: &Self) -> Self {
        if self.0 >= other.0 {
            Decimal(self.0 - other.0)
        } else {
            Decimal(other.0 - self.0)
        }
    }

    /// Check if the Decimal is zero
    ///
    /// # Returns
    /// * `bool` - True if the Decimal is zero, false otherwise
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
