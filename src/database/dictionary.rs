//! The dictionary contract shared by map implementations.

use super::{ArraySet, KeyHash, LinearDict};

/// Key → value dictionary with set-valued key and value extraction.
///
/// "Not found" is always `None`, never an error.
pub trait Dictionary<K, V> {
    /// Inserts or updates `key` and returns the stored value.
    fn put(
        &mut self,
        key: K,
        value: V,
    ) -> &V;

    fn get(
        &self,
        key: &K,
    ) -> Option<&V>;

    fn contains(
        &self,
        key: &K,
    ) -> bool;

    /// Removes `key`, returning its value if it was present.
    fn remove(
        &mut self,
        key: &K,
    ) -> Option<V>;

    /// Number of live entries.
    fn size(&self) -> usize;

    fn key_set(&self) -> ArraySet<K>
    where
        K: Clone + PartialEq;

    fn value_set(&self) -> ArraySet<V>
    where
        V: Clone + PartialEq;
}

impl<K, V> Dictionary<K, V> for LinearDict<K, V>
where
    K: Eq + KeyHash,
{
    fn put(
        &mut self,
        key: K,
        value: V,
    ) -> &V {
        self.put(key, value)
    }

    fn get(
        &self,
        key: &K,
    ) -> Option<&V> {
        self.get(key)
    }

    fn contains(
        &self,
        key: &K,
    ) -> bool {
        self.contains(key)
    }

    fn remove(
        &mut self,
        key: &K,
    ) -> Option<V> {
        self.remove(key)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn key_set(&self) -> ArraySet<K>
    where
        K: Clone + PartialEq,
    {
        self.key_set()
    }

    fn value_set(&self) -> ArraySet<V>
    where
        V: Clone + PartialEq,
    {
        self.value_set()
    }
}
