use std::fmt;

use probedict_error::{ensure, ProbeResult, SetError};

use super::UnorderedSet;

/// Number of elements a set built with [`ArraySet::new`] holds before
/// growing.
pub const DEFAULT_SET_CAPACITY: usize = 15;

/// A full set grows to `(len + 1) * SET_CAPACITY_MULTIPLIER`.
pub const SET_CAPACITY_MULTIPLIER: usize = 2;

/// Set backed by a flat vector with linear-scan membership.
///
/// - Adding an element that is already present is a no-op.
/// - Removal moves the last element into the freed position.
/// - Equality ignores element order.
#[derive(Clone)]
pub struct ArraySet<T> {
    elements: Vec<T>,
    capacity: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl<T> ArraySet<T> {
    /// Creates an empty set with room for [`DEFAULT_SET_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity_hint(DEFAULT_SET_CAPACITY)
    }

    /// Creates an empty set with room for `capacity` elements.
    ///
    /// Fails with `InvalidArgs` when `capacity` is negative.
    pub fn with_capacity(capacity: isize) -> ProbeResult<Self> {
        ensure!(
            capacity >= 0,
            SetError::NegativeCapacity {
                capacity: capacity as i64
            }
        );
        Ok(Self::with_capacity_hint(capacity.unsigned_abs()))
    }

    pub fn with_capacity_hint(capacity: usize) -> Self {
        ArraySet {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Logical capacity: the number of elements held before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates the elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn ensure_capacity(&mut self) {
        if self.elements.len() == self.capacity {
            self.capacity = (self.elements.len() + 1) * SET_CAPACITY_MULTIPLIER;
            self.elements
                .reserve_exact(self.capacity - self.elements.len());
        }
    }
}

impl<T: PartialEq> ArraySet<T> {
    /// Adds `element` unless an equal element is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn add(
        &mut self,
        element: T,
    ) -> bool {
        if self.contains(&element) {
            return false;
        }

        self.ensure_capacity();
        self.elements.push(element);
        true
    }

    pub fn contains(
        &self,
        element: &T,
    ) -> bool {
        self.index_of(element).is_some()
    }

    /// Removes `element`, moving the last element into its position.
    pub fn remove(
        &mut self,
        element: &T,
    ) -> bool {
        match self.index_of(element) {
            Some(idx) => {
                self.elements.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    fn index_of(
        &self,
        element: &T,
    ) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Trait implementations
////////////////////////////////////////////////////////////////////////////////

impl<T: PartialEq> UnorderedSet<T> for ArraySet<T> {
    fn add(
        &mut self,
        element: T,
    ) -> bool {
        self.add(element)
    }

    fn contains(
        &self,
        element: &T,
    ) -> bool {
        self.contains(element)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn remove(
        &mut self,
        element: &T,
    ) -> bool {
        self.remove(element)
    }

    fn union(
        &self,
        other: &Self,
    ) -> Self
    where
        T: Clone,
    {
        let mut set = other.difference(self);
        for element in &self.elements {
            set.add(element.clone());
        }
        set
    }

    fn intersection(
        &self,
        other: &Self,
    ) -> Self
    where
        T: Clone,
    {
        self.elements
            .iter()
            .filter(|e| other.contains(e))
            .cloned()
            .collect()
    }

    fn difference(
        &self,
        other: &Self,
    ) -> Self
    where
        T: Clone,
    {
        self.elements
            .iter()
            .filter(|e| !other.contains(e))
            .cloned()
            .collect()
    }
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArraySet<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.elements.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: PartialEq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
