//! Validation of mints and redemptions against the basket's target weights.
//!
//! Every function here is pure: the basket snapshot is only read, and the caller applies the
//! balance change once a forge has been accepted.
//!
//! Deviations are kept in D36 (balance D18 x weight D18) so that no rounding happens between the
//! comparison of a deviation and the grace band. Movement towards the target is judged on weights,
//! since the basket total changes with the forge.
use crate::utils::structs::Basket;
use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;
use shared::structs::ForgeType;
use shared::utils::Decimal;

/// Distance between a basset's balance and the balance its target weight implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deviation {
    /// |balance - total * target_weight|, scaled in D36
    pub magnitude: Decimal,

    /// |balance / total - target_weight|, scaled in D36 and rounded down
    pub weight: Decimal,
}

impl Deviation {
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

/// Validate a mint of `quantities` (D18, aligned with the basket's bassets).
pub fn validate_mint(basket: &Basket, quantities: &[u128]) -> Result<()> {
    validate_forge(basket, quantities, ForgeType::Mint)
}

/// Validate a redemption of `quantities` (D18, aligned with the basket's bassets).
pub fn validate_redemption(basket: &Basket, quantities: &[u128]) -> Result<()> {
    validate_forge(basket, quantities, ForgeType::Redemption)
}

/// Validate a forge in either direction.
///
/// # Arguments
/// * `basket` - The basket snapshot, left untouched.
/// * `quantities` - One D18 quantity per basset.
/// * `forge_type` - Whether the quantities are added to or removed from the vault.
pub fn validate_forge(basket: &Basket, quantities: &[u128], forge_type: ForgeType) -> Result<()> {
    check_condition!(
        quantities.len() == basket.bassets.len(),
        MissingOrExtraBasset
    );

    basket.validate()?;

    // An empty forge moves nothing
    if quantities.iter().all(|quantity| *quantity == 0) {
        return Ok(());
    }

    let pre_balances = basket
        .bassets
        .iter()
        .map(|basset| Decimal::from_scaled(basset.vault_balance))
        .collect::<Vec<Decimal>>();

    let post_balances = match forge_type {
        ForgeType::Mint => pre_balances
            .iter()
            .zip(quantities.iter())
            .map(|(balance, quantity)| balance.add(&Decimal::from_scaled(*quantity)))
            .collect::<Result<Vec<Decimal>>>()?,
        ForgeType::Redemption => {
            // Solvency comes before any weight logic
            check_condition!(
                pre_balances
                    .iter()
                    .zip(quantities.iter())
                    .all(|(balance, quantity)| Decimal::from_scaled(*quantity) <= *balance),
                InsufficientVaultBalance
            );

            pre_balances
                .iter()
                .zip(quantities.iter())
                .map(|(balance, quantity)| balance.sub(&Decimal::from_scaled(*quantity)))
                .collect::<Result<Vec<Decimal>>>()?
        }
    };

    validate_weightings(basket, &pre_balances, &post_balances)
}

/// Compare the deviations before and after the forge.
///
/// A basket sitting exactly on its targets can only be forged proportionally. Otherwise every
/// basset must either end within the grace band or get strictly closer to its target, unless the
/// basket as a whole gets strictly closer to its targets.
fn validate_weightings(
    basket: &Basket,
    pre_balances: &[Decimal],
    post_balances: &[Decimal],
) -> Result<()> {
    let post_total = sum(post_balances)?;

    // Nothing to weigh
    if post_total.is_zero() {
        return Ok(());
    }

    let pre_deviations = calculate_deviations(basket, pre_balances)?;
    let post_deviations = calculate_deviations(basket, post_balances)?;

    if pre_deviations.iter().all(Deviation::is_zero) {
        check_condition!(
            post_deviations.iter().all(Deviation::is_zero),
            OffOptimalWeighting
        );

        return Ok(());
    }

    // D18 * D18 = D36, same scale as the deviations
    let grace_band = Decimal::from_scaled(basket.grace).mul(&post_total)?;

    let every_basset_acceptable = pre_deviations
        .iter()
        .zip(post_deviations.iter())
        .all(|(pre, post)| post.magnitude <= grace_band || post.weight < pre.weight);

    if every_basset_acceptable {
        return Ok(());
    }

    let total_pre_deviation = total_deviation(&pre_deviations)?;
    let total_post_deviation = total_deviation(&post_deviations)?;

    check_condition!(
        total_post_deviation < total_pre_deviation,
        MovesAwayFromTarget
    );

    Ok(())
}

/// Deviation of each balance from `total * target_weight`, where total is the sum of `balances`.
///
/// The weight deviation is rounded down. Flooring keeps the order, so a weight that compares as
/// strictly smaller is strictly smaller.
///
/// # Arguments
/// * `basket` - Provides the target weights, `balances` must follow its order.
/// * `balances` - D18 balances, either the current ones or the ones after a forge.
///
/// Returns one deviation per basset, both parts in D36.
pub fn calculate_deviations(basket: &Basket, balances: &[Decimal]) -> Result<Vec<Deviation>> {
    check_condition!(
        balances.len() == basket.bassets.len(),
        MissingOrExtraBasset
    );

    let total = sum(balances)?;

    basket
        .bassets
        .iter()
        .zip(balances.iter())
        .map(|(basset, balance)| -> Result<Deviation> {
            // D18 * D18 = D36
            let actual = balance.mul(&Decimal::ONE_E18)?;
            let target = total.mul(&Decimal::from_scaled(basset.target_weight))?;

            let magnitude = actual.abs_diff(&target);

            // D36 * D18 / D18 = D36, an empty basket sits on target
            let weight = if total.is_zero() {
                Decimal::ZERO
            } else {
                magnitude.mul(&Decimal::ONE_E18)?.div(&total)?
            };

            Ok(Deviation { magnitude, weight })
        })
        .collect()
}

fn total_deviation(deviations: &[Deviation]) -> Result<Decimal> {
    deviations
        .iter()
        .try_fold(Decimal::ZERO, |total, deviation| total.add(&deviation.weight))
}

fn sum(balances: &[Decimal]) -> Result<Decimal> {
    balances
        .iter()
        .try_fold(Decimal::ZERO, |total, balance| total.add(balance))
}
