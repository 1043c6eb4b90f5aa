use anchor_lang::prelude::*;
use shared::structs::ForgeType;

use crate::events::ForgeValidated;
use crate::utils::{forge_lib, Basket};

#[derive(Accounts)]
pub struct ValidateRedemption {}

/// Validate a redemption against the basket snapshot.
///
/// # Arguments
/// * `basket` - The basket snapshot, balances in D18.
/// * `quantities` - One quantity per basset, in each basset's native decimals.
pub fn handler(
    _ctx: Context<ValidateRedemption>,
    basket: Basket,
    quantities: Vec<u128>,
) -> Result<()> {
    let normalised_quantities = basket.normalise_quantities(&quantities)?;

    forge_lib::validate_redemption(&basket, &normalised_quantities)?;

    emit!(ForgeValidated {
        forge_type: ForgeType::Redemption,
        basset_count: basket.len() as u8,
    });

    Ok(())
}
