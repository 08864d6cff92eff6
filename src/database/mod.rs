//! Built-in data structures: the linear-probing dictionary and the unordered
//! set used to materialize its keys and values.

pub mod array_set;
pub mod dictionary;
pub mod linear_dict;

pub use array_set::*;
pub use dictionary::*;
pub use linear_dict::*;
