use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{MAX_DECIMALS, ONE_PERCENT_WEIGHT};
use shared::errors::ErrorCode;
use shared::structs::BassetStatus;
use shared::utils::Decimal;

/// A single collateral asset of the basket.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Basset {
    /// Scaled in D18, whatever the native decimals of the asset
    pub vault_balance: u128,

    /// Scaled in D18, 1e18 being 100%
    pub target_weight: u128,

    /// Native precision of the asset, only used when converting amounts into D18
    pub decimals: u8,

    pub status: BassetStatus,
}

impl Default for Basset {
    fn default() -> Self {
        Basset {
            vault_balance: 0,
            target_weight: 0,
            decimals: MAX_DECIMALS,
            status: BassetStatus::Normal,
        }
    }
}

impl Basset {
    pub fn new(target_weight: u128, vault_balance: u128, decimals: u8) -> Self {
        Basset {
            vault_balance,
            target_weight,
            decimals,
            status: BassetStatus::Normal,
        }
    }

    /// Build a basset from a whole percentage and a whole token amount, e.g. (40, 4000, 6) is a
    /// 40% target holding 4000 tokens of a 6 decimals asset.
    ///
    /// # Arguments
    /// * `target_percent` - The target weight, in percent.
    /// * `whole_balance` - The vault balance, in whole tokens.
    /// * `decimals` - The native precision of the asset.
    pub fn from_whole(target_percent: u64, whole_balance: u64, decimals: u8) -> Result<Self> {
        check_condition!(decimals <= MAX_DECIMALS, InvalidBassetDecimals);

        let target_weight = percent_to_weight(target_percent)?;
        let vault_balance = Decimal::from_plain(whole_balance)?.to_scaled()?;

        Ok(Basset::new(target_weight, vault_balance, decimals))
    }

    /// Normalise an amount expressed in this basset's native precision into D18.
    pub fn normalise_amount(&self, native_amount: u128) -> Result<u128> {
        Decimal::from_native_amount(native_amount, self.decimals)?.to_scaled()
    }
}

/// Convert a whole percentage into a D18 weight, 50 being 5e17.
pub fn percent_to_weight(percent: u64) -> Result<u128> {
    (percent as u128)
        .checked_mul(ONE_PERCENT_WEIGHT)
        .ok_or(ErrorCode::MathOverflow.into())
}
