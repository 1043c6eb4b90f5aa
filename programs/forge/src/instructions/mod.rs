pub mod validate_mint;
pub mod validate_redemption;

pub use validate_mint::*;
pub use validate_redemption::*;
