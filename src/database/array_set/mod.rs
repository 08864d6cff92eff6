//! Unordered set contract and its linear-scan implementation.
//!
//! `ArraySet` materializes the key and value sets of a dictionary: elements
//! live in a flat vector, membership is a linear scan, duplicates are
//! rejected on insertion.

pub mod array_set_base;
pub mod unordered_set;

pub use array_set_base::*;
pub use unordered_set::*;
