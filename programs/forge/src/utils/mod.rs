pub mod forge_lib;
pub mod structs;

pub use structs::*;
