/// Unordered collection without duplicates.
///
/// Iteration order is unspecified. The set algebra methods build new sets
/// and leave both operands unchanged.
pub trait UnorderedSet<T> {
    /// Adds `element` unless an equal one is present. Returns `true` if added.
    fn add(
        &mut self,
        element: T,
    ) -> bool;

    /// Adds every element of `elements`, skipping duplicates.
    fn add_all<I>(
        &mut self,
        elements: I,
    ) where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for element in elements {
            self.add(element);
        }
    }

    fn contains(
        &self,
        element: &T,
    ) -> bool;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the set can hold before growing.
    fn capacity(&self) -> usize;

    /// Removes `element`. Returns `true` if it was present.
    fn remove(
        &mut self,
        element: &T,
    ) -> bool;

    /// Elements present in either set.
    fn union(
        &self,
        other: &Self,
    ) -> Self
    where
        Self: Sized,
        T: Clone;

    /// Elements present in both sets.
    fn intersection(
        &self,
        other: &Self,
    ) -> Self
    where
        Self: Sized,
        T: Clone;

    /// Elements of `self` that are absent from `other`.
    fn difference(
        &self,
        other: &Self,
    ) -> Self
    where
        Self: Sized,
        T: Clone;
}
