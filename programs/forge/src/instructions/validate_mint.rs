use anchor_lang::prelude::*;
use shared::structs::ForgeType;

use crate::events::ForgeValidated;
use crate::utils::{forge_lib, Basket};

/// No account is read nor written, the basket comes in as a snapshot built by the caller.
#[derive(Accounts)]
pub struct ValidateMint {}

/// Validate a mint against the basket snapshot.
///
/// # Arguments
/// * `basket` - The basket snapshot, balances in D18.
/// * `quantities` - One quantity per basset, in each basset's native decimals.
pub fn handler(_ctx: Context<ValidateMint>, basket: Basket, quantities: Vec<u128>) -> Result<()> {
    let normalised_quantities = basket.normalise_quantities(&quantities)?;

    forge_lib::validate_mint(&basket, &normalised_quantities)?;

    emit!(ForgeValidated {
        forge_type: ForgeType::Mint,
        basset_count: basket.len() as u8,
    });

    Ok(())
}
