pub mod growth;
pub mod key_hash;
pub mod linear_dict_base;
mod slot;

// Re-export the public surface of the submodules.
pub use growth::{GrowthPolicy, CAPACITY_MULTIPLIER, DEFAULT_CAPACITY, LOAD_THRESHOLD};
pub use key_hash::*;
pub use linear_dict_base::*;
