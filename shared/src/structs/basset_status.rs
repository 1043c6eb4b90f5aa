use anchor_lang::prelude::*;

/// Lifecycle of a basset within its basket.
///
/// Only `Normal` bassets are expected today. `Isolated` and `Liquidating` are carried so that
/// re-collateralisation can later exclude a basset from the weight computation without changing
/// the shape of the basket.
#[derive(
    AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, PartialEq, Eq, Debug, InitSpace,
)]
pub enum BassetStatus {
    #[default]
    Normal = 0,
    Isolated = 1,
    Liquidating = 2,
}
