//! Growth schedule of the probing table: load-factor checks and the prime
//! capacity search.

use serde::{Deserialize, Serialize};

/// Default number of slots of a new dictionary.
pub const DEFAULT_CAPACITY: usize = 13;

/// Load factor at which a new insertion triggers a rehash.
pub const LOAD_THRESHOLD: f64 = 0.67;

/// Growth multiplier: the next capacity is the first prime at or above
/// `capacity * CAPACITY_MULTIPLIER + 1`.
pub const CAPACITY_MULTIPLIER: usize = 2;

/// Which slots count toward the rehash trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthPolicy {
    /// Only live entries count. Tombstones accumulate until the next growth.
    #[default]
    LiveEntries,
    /// Tombstones count as well. When the live entries alone stay under the
    /// threshold the table is rebuilt at the same capacity instead of grown.
    CountTombstones,
}

/// `true` if holding `entries` in `capacity` slots reaches `threshold`.
///
/// An empty table always needs to grow before the first insertion.
#[inline]
pub(crate) fn reaches_threshold(
    entries: usize,
    capacity: usize,
    threshold: f64,
) -> bool {
    capacity == 0 || entries as f64 / capacity as f64 >= threshold
}

/// Next table size after `current`.
pub fn next_prime_capacity(current: usize) -> usize {
    let mut candidate = current
        .saturating_mul(CAPACITY_MULTIPLIER)
        .saturating_add(1);

    while !is_prime(candidate) {
        candidate += 1;
    }

    candidate
}

/// Trial division by odd numbers up to `sqrt(candidate) + 1`.
pub fn is_prime(candidate: usize) -> bool {
    match candidate {
        0 | 1 => false,
        2 | 3 => true,
        n if n % 2 == 0 => false,
        n => {
            let limit = (n as f64).sqrt() as usize + 1;
            (3..=limit)
                .step_by(2)
                .take_while(|&d| d < n)
                .all(|d| n % d != 0)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
