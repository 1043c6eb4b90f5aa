use anchor_lang::prelude::*;

use instructions::*;
use utils::*;

pub mod events;
pub mod instructions;
pub mod utils;

declare_id!("9wQhZ7QcKa3bTmqsZ1Hk8vPY3mRSt5fXeNBj2uzDcGVo");

#[program]
pub mod forge {

    use super::*;

    pub fn validate_mint(
        ctx: Context<ValidateMint>,
        basket: Basket,
        quantities: Vec<u128>,
    ) -> Result<()> {
        validate_mint::handler(ctx, basket, quantities)
    }

    pub fn validate_redemption(
        ctx: Context<ValidateRedemption>,
        basket: Basket,
        quantities: Vec<u128>,
    ) -> Result<()> {
        validate_redemption::handler(ctx, basket, quantities)
    }
}
