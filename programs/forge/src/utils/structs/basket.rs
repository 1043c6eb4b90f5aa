use crate::utils::structs::Basset;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{FULL_WEIGHT, MAX_BASSETS, MAX_DECIMALS};
use shared::errors::ErrorCode;
use shared::utils::Decimal;

/// A snapshot of the basket, taken by the caller right before a forge is validated.
///
/// The order of `bassets` is the order every quantity vector has to follow.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Basket {
    pub bassets: Vec<Basset>,

    /// Scaled in D18, tolerance around each target weight (5e15 is 0.5%)
    pub grace: u128,
}

impl Basket {
    pub fn new(bassets: Vec<Basset>, grace: u128) -> Result<Self> {
        let basket = Basket { bassets, grace };

        basket.validate()?;

        Ok(basket)
    }

    /// Checks the invariants every snapshot must hold before being weighed:
    ///     - At most MAX_BASSETS bassets
    ///     - Target weights summing to exactly 100%
    ///     - Grace within [0, 100%]
    ///     - No basset more precise than D18
    pub fn validate(&self) -> Result<()> {
        check_condition!(
            self.bassets.len() <= MAX_BASSETS,
            MaxNumberOfBassetsReached
        );

        check_condition!(self.grace <= FULL_WEIGHT, InvalidGrace);

        check_condition!(
            self.bassets.iter().all(|b| b.decimals <= MAX_DECIMALS),
            InvalidBassetDecimals
        );

        check_condition!(
            self.total_target_weight()? == FULL_WEIGHT,
            InvalidTargetWeights
        );

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bassets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bassets.is_empty()
    }

    /// Sum of every target weight, in D18.
    pub fn total_target_weight(&self) -> Result<u128> {
        self.bassets.iter().try_fold(0u128, |total, basset| {
            total
                .checked_add(basset.target_weight)
                .ok_or(ErrorCode::MathOverflow.into())
        })
    }

    /// Sum of every vault balance, in D18.
    pub fn total_vault_value(&self) -> Result<Decimal> {
        self.bassets
            .iter()
            .try_fold(Decimal::ZERO, |total, basset| {
                total.add(&Decimal::from_scaled(basset.vault_balance))
            })
    }

    /// Convert quantities given in each basset's native precision into D18.
    ///
    /// # Arguments
    /// * `native_quantities` - One quantity per basset, in the basket's order.
    pub fn normalise_quantities(&self, native_quantities: &[u128]) -> Result<Vec<u128>> {
        check_condition!(
            native_quantities.len() == self.bassets.len(),
            MissingOrExtraBasset
        );

        self.bassets
            .iter()
            .zip(native_quantities.iter())
            .map(|(basset, quantity)| basset.normalise_amount(*quantity))
            .collect()
    }
}
