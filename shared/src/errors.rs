//! Error codes for the forge.
//!
//! Custom error for Anchor programs start at 6000. i.e. here MissingOrExtraBasset error would be 6000 and
//! OffOptimalWeighting would be 6001.

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Must provide values for all Bassets in system")]
    MissingOrExtraBasset,

    #[msg("Basket should not deviate from the optimal weightings")]
    OffOptimalWeighting,

    #[msg("Forge must move Basket weightings towards the target")]
    MovesAwayFromTarget,

    #[msg("Vault must have sufficient balance to redeem")]
    InsufficientVaultBalance,

    #[msg("Invalid Target Weights")]
    InvalidTargetWeights,

    #[msg("Invalid Grace")]
    InvalidGrace,

    #[msg("Invalid Basset Decimals")]
    InvalidBassetDecimals,

    #[msg("Max Number of Bassets Reached")]
    MaxNumberOfBassetsReached,

    #[msg("Math Overflow")]
    MathOverflow,
}

/// Check a condition and return an error if it is not met.
///
/// # Arguments
/// * `condition` - The condition to check.
/// * `error` - The error to return if the condition is not met.
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err(error!(ErrorCode::$error));
        }
    };
}
