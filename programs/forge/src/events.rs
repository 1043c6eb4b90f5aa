use anchor_lang::prelude::*;
use shared::structs::ForgeType;

/// Event emitted when a forge passed validation.
///
/// # Arguments
/// * `forge_type` - Whether the forge was a mint or a redemption.
/// * `basset_count` - The number of bassets in the validated basket.
#[event]
pub struct ForgeValidated {
    pub forge_type: ForgeType,
    pub basset_count: u8,
}
