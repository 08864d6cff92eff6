//! Open-addressing dictionary with linear probing.
//!
//! [`LinearDict`] stores entries in a flat slot array. Collisions are
//! resolved by scanning forward (wrapping at the end), removals leave
//! tombstones so later entries of a probe run stay reachable, and the table
//! grows to the next prime above `capacity * 2` once the load factor would
//! reach its threshold.

/// Console commands over a string dictionary.
pub mod command;
/// Settings loading (`config` crate + environment).
pub mod config;
/// The dictionary, its key hashing and the unordered set it returns.
pub mod database;
/// Error types and status codes.
pub mod error;
/// Subscriber setup for `tracing`.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Console API.
pub use command::{Command, Reply, Session, StringDict};
/// config
pub use config::{DictConfig, LogFormat, LoggingConfig, Settings};
/// Dictionary, hashing capability and sets.
pub use database::{
    ArraySet, Dictionary, GrowthPolicy, KeyHash, LinearDict, StdHash, UnorderedSet,
};
/// Operation errors and result types.
pub use error::{CommandError, DictError, ProbeResult, SetError, StackError, StatusCode};
