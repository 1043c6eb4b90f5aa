pub mod basset_status;
pub mod forge_type;

pub use basset_status::*;
pub use forge_type::*;
