use anchor_lang::prelude::*;

/// Direction of a forge against the basket.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ForgeType {
    /// Collateral is deposited, balances grow.
    Mint,
    /// Collateral is withdrawn, balances shrink.
    Redemption,
}
