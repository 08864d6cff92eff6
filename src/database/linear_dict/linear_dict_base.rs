use std::{fmt, iter::FusedIterator, mem};

use probedict_error::{ensure, DictError, ProbeResult};
use tracing::{debug, trace};

use super::{
    growth::{
        next_prime_capacity, reaches_threshold, GrowthPolicy, CAPACITY_MULTIPLIER,
        DEFAULT_CAPACITY, LOAD_THRESHOLD,
    },
    slot::Slot,
    KeyHash,
};
use crate::{config::DictConfig, database::ArraySet};

/// Associative map over a single flat slot array, resolved by linear probing.
///
/// **INVARIANTS:**
///
/// - `count` equals the number of `Occupied` slots, `tombstones` the number of
///   `Tombstone` slots; `count + tombstones <= capacity`.
/// - A key occupies at most one slot.
/// - Every occupied key is reachable from its home index
///   `|hash| mod capacity` by scanning forward and wrapping at the end.
/// - After an insertion returns, `count / capacity` is below the load
///   threshold.
///
/// Lookups do not stop at the first empty slot: they scan the full wraparound
/// until a match is found. Removal leaves a tombstone in place; tombstones
/// are dropped only when the table is rebuilt.
#[derive(Clone)]
pub struct LinearDict<K, V> {
    slots: Vec<Slot<K, V>>,
    count: usize,
    tombstones: usize,
    load_threshold: f64,
    policy: GrowthPolicy,
}

/// Iterator over the occupied slots of a [`LinearDict`], in slot order.
pub struct LinearDictIter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl<K, V> LinearDict<K, V> {
    /// Slots in a dictionary built with [`LinearDict::new`].
    pub const DEFAULT_CAPACITY: usize = DEFAULT_CAPACITY;
    /// Load factor that triggers growth before an insertion.
    pub const LOAD_THRESHOLD: f64 = LOAD_THRESHOLD;
    /// Growth multiplier used by the prime capacity search.
    pub const CAPACITY_MULTIPLIER: usize = CAPACITY_MULTIPLIER;

    /// Creates an empty dictionary with [`Self::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::build(DEFAULT_CAPACITY, LOAD_THRESHOLD, GrowthPolicy::default())
    }

    /// Creates an empty dictionary with `capacity` slots.
    ///
    /// Fails with `InvalidArgs` when `capacity` is negative. A capacity of
    /// zero is accepted; the table grows on the first insertion.
    pub fn with_capacity(capacity: isize) -> ProbeResult<Self> {
        ensure!(
            capacity >= 0,
            DictError::NegativeCapacity {
                capacity: capacity as i64
            }
        );

        Ok(Self::build(
            capacity.unsigned_abs(),
            LOAD_THRESHOLD,
            GrowthPolicy::default(),
        ))
    }

    /// Creates an empty dictionary from a [`DictConfig`].
    ///
    /// Validates the capacity (`>= 0`) and the load threshold (`(0, 1]`).
    pub fn with_config(config: &DictConfig) -> ProbeResult<Self> {
        let threshold = config.load_threshold;

        ensure!(
            threshold.is_finite() && threshold > 0.0 && threshold <= 1.0,
            DictError::InvalidLoadThreshold { threshold }
        );

        let capacity = config.initial_capacity;
        ensure!(capacity >= 0, DictError::NegativeCapacity { capacity });

        Ok(Self::build(
            capacity.unsigned_abs() as usize,
            threshold,
            config.growth_policy,
        ))
    }

    fn build(
        capacity: usize,
        load_threshold: f64,
        policy: GrowthPolicy,
    ) -> Self {
        debug!(capacity, load_threshold, ?policy, "creating linear dictionary");

        LinearDict {
            slots: empty_slots(capacity),
            count: 0,
            tombstones: 0,
            load_threshold,
            policy,
        }
    }

    /// Number of live entries (tombstones excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of deleted slots left since the last rebuild.
    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// `len / capacity`; `0.0` for a table without slots.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.count as f64 / self.slots.len() as f64
    }

    pub fn load_threshold(&self) -> f64 {
        self.load_threshold
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Resets every slot to empty, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.count = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over `(&K, &V)` in slot order.
    pub fn iter(&self) -> LinearDictIter<'_, K, V> {
        LinearDictIter {
            slots: self.slots.iter(),
            remaining: self.count,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V> LinearDict<K, V>
where
    K: Eq + KeyHash,
{
    /// Inserts or updates `key` and returns the stored value.
    ///
    /// A new key may trigger a rehash first; updating an existing key never
    /// does.
    pub fn put(
        &mut self,
        key: K,
        value: V,
    ) -> &V {
        self.upsert(key, value).0
    }

    /// Inserts or updates `key`, returning the previous value if there was
    /// one.
    pub fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Option<V> {
        self.upsert(key, value).1
    }

    /// Returns `Some(&V)` for `key`, or `None` if absent.
    pub fn get(
        &self,
        key: &K,
    ) -> Option<&V> {
        let idx = self.find_index(key)?;
        self.slots[idx].entry().map(|(_, v)| v)
    }

    pub fn get_mut(
        &mut self,
        key: &K,
    ) -> Option<&mut V> {
        let idx = self.find_index(key)?;
        self.slots[idx].value_mut()
    }

    pub fn contains(
        &self,
        key: &K,
    ) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot.
    ///
    /// Returns the removed value, or `None` (and changes nothing) if the key
    /// is absent.
    pub fn remove(
        &mut self,
        key: &K,
    ) -> Option<V> {
        let idx = self.find_index(key)?;
        let removed = mem::replace(&mut self.slots[idx], Slot::Tombstone);

        self.count -= 1;
        self.tombstones += 1;
        trace!(index = idx, len = self.count, "removed entry");

        removed.into_value()
    }

    /// Collects the keys of all live entries, in slot order.
    pub fn key_set(&self) -> ArraySet<K>
    where
        K: Clone,
    {
        let mut set = ArraySet::with_capacity_hint(self.capacity());
        for (key, _) in self.iter() {
            set.add(key.clone());
        }
        set
    }

    /// Collects the values of all live entries, in slot order. Equal values
    /// collapse into one element.
    pub fn value_set(&self) -> ArraySet<V>
    where
        V: Clone + PartialEq,
    {
        let mut set = ArraySet::with_capacity_hint(self.capacity());
        for (_, value) in self.iter() {
            set.add(value.clone());
        }
        set
    }

    /// Home index of `key`: `|hash| mod capacity`.
    ///
    /// Uses the unsigned absolute value, so `i32::MIN` maps to
    /// `2^31 mod capacity` instead of overflowing.
    #[inline]
    fn home_index(
        &self,
        key: &K,
    ) -> usize {
        home_index(key.key_hash(), self.slots.len())
    }

    /// Full wraparound scan for the occupied slot holding `key`.
    fn find_index(
        &self,
        key: &K,
    ) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }

        let start = self.home_index(key);
        probe_order(start, self.slots.len()).find(|&i| self.slots[i].holds(key))
    }

    fn upsert(
        &mut self,
        key: K,
        value: V,
    ) -> (&V, Option<V>) {
        if let Some(idx) = self.find_index(&key) {
            let Some(slot_value) = self.slots[idx].value_mut() else {
                unreachable!("find_index matched a slot that is not occupied");
            };
            let previous = mem::replace(slot_value, value);
            return (&*slot_value, Some(previous));
        }

        self.grow_if_needed();

        let start = self.home_index(&key);
        let Some(idx) = first_free(&self.slots, start) else {
            unreachable!("no free slot left after the growth check");
        };

        if self.slots[idx].is_tombstone() {
            self.tombstones -= 1;
        }
        self.count += 1;
        trace!(index = idx, home = start, len = self.count, "inserted entry");

        (&*self.slots[idx].fill(key, value), None)
    }

    /// Rebuilds the table until one more entry fits under the threshold.
    fn grow_if_needed(&mut self) {
        loop {
            let capacity = self.slots.len();
            let pending = match self.policy {
                GrowthPolicy::LiveEntries => self.count + 1,
                GrowthPolicy::CountTombstones => self.count + self.tombstones + 1,
            };

            if !reaches_threshold(pending, capacity, self.load_threshold) {
                return;
            }

            let live_fits = !reaches_threshold(self.count + 1, capacity, self.load_threshold);
            let new_capacity = if live_fits {
                // Only reachable under CountTombstones: purge in place.
                capacity
            } else {
                next_prime_capacity(capacity)
            };

            self.rehash(new_capacity);
        }
    }

    /// Moves every live entry into a fresh table of `new_capacity` slots.
    fn rehash(
        &mut self,
        new_capacity: usize,
    ) {
        let old_capacity = self.slots.len();
        let old = mem::replace(&mut self.slots, empty_slots(new_capacity));
        let purged = self.tombstones;

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                let start = home_index(key.key_hash(), new_capacity);
                let Some(idx) = first_free(&self.slots, start) else {
                    unreachable!("rehash target has fewer slots than live entries");
                };
                self.slots[idx].fill(key, value);
            }
        }

        self.tombstones = 0;

        debug!(
            old_capacity,
            new_capacity,
            live = self.count,
            purged_tombstones = purged,
            "rehashed linear dictionary"
        );
    }
}

/// `|hash| mod capacity`; `capacity` must be non-zero.
#[inline]
pub(crate) fn home_index(
    hash: i32,
    capacity: usize,
) -> usize {
    hash.unsigned_abs() as usize % capacity
}

/// Indices from `start` to the end of the table, then from 0 up to `start`.
#[inline]
fn probe_order(
    start: usize,
    capacity: usize,
) -> impl Iterator<Item = usize> {
    (start..capacity).chain(0..start)
}

fn first_free<K, V>(
    slots: &[Slot<K, V>],
    start: usize,
) -> Option<usize> {
    probe_order(start, slots.len()).find(|&i| slots[i].is_free())
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

////////////////////////////////////////////////////////////////////////////////
// Trait implementations
////////////////////////////////////////////////////////////////////////////////

impl<'a, K, V> Iterator for LinearDictIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot.entry() {
                self.remaining -= 1;
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for LinearDictIter<'_, K, V> {}

impl<K, V> FusedIterator for LinearDictIter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LinearDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = LinearDictIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for LinearDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for LinearDict<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for LinearDict<K, V>
where
    K: Eq + KeyHash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LinearDict<K, V>
where
    K: Eq + KeyHash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
