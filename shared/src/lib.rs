//! Shared constants, errors and fixed-point math for the basket forge.
//!
//! # Modules
//!
//! * `constants` - Scaling factors and basket limits.
//! * `errors` - Error codes returned by the forge validator.
//! * `structs` - Plain data types shared between programs.
//! * `utils` - Fixed-point math utilities.
pub mod constants;
pub mod errors;
pub mod structs;
pub mod utils;
