/// One cell of the probing table.
///
/// A tombstone carries no key or value, so a deleted entry can never be
/// matched by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<K, V> {
    /// Never used in this table generation.
    Empty,
    /// Previously occupied, now deleted. Keeps probe chains intact.
    Tombstone,
    Occupied { key: K, value: V },
}

impl<K, V> Slot<K, V> {
    /// `true` if a new entry may be placed here.
    #[inline]
    pub(crate) fn is_free(&self) -> bool {
        matches!(self, Slot::Empty | Slot::Tombstone)
    }

    #[inline]
    pub(crate) fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// `true` if the slot is occupied by `key`.
    #[inline]
    pub(crate) fn holds(
        &self,
        key: &K,
    ) -> bool
    where
        K: Eq,
    {
        matches!(self, Slot::Occupied { key: k, .. } if k == key)
    }

    #[inline]
    pub(crate) fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Consumes the slot, returning the stored value, if any.
    #[inline]
    pub(crate) fn into_value(self) -> Option<V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Stores a fresh entry in the slot and returns its value.
    pub(crate) fn fill(
        &mut self,
        key: K,
        value: V,
    ) -> &mut V {
        *self = Slot::Occupied { key, value };
        match self {
            Slot::Occupied { value, .. } => value,
            _ => unreachable!("slot was filled just above"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_states() {
        assert!(Slot::<u8, u8>::Empty.is_free());
        assert!(Slot::<u8, u8>::Tombstone.is_free());
        assert!(!Slot::Occupied { key: 1u8, value: 2u8 }.is_free());
    }

    /// A tombstone never matches, whatever key is asked for.
    #[test]
    fn test_tombstone_never_holds_key() {
        let slot: Slot<u8, u8> = Slot::Tombstone;
        assert!(!slot.holds(&0));
        assert!(slot.entry().is_none());
        assert!(slot.into_value().is_none());
    }

    #[test]
    fn test_fill_overwrites_tombstone() {
        let mut slot = Slot::Tombstone;
        *slot.fill("k", 1) += 1;
        assert!(slot.holds(&"k"));
        assert_eq!(slot.entry(), Some((&"k", &2)));
        assert_eq!(slot.value_mut(), Some(&mut 2));
    }
}
