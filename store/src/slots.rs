//! Slot lists: index lists whose removed entries leave a vacant slot behind.
//!
//! Organization employment indices never shrink. Removing an entry vacates its
//! slot; the next insertion reuses the lowest vacant slot before appending.
//! Vacancies live in a free set and live values in an occupancy map, so
//! neither operation scans the list.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// One position in a [`SlotList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot<T> {
    Occupied(T),
    /// A logically removed entry.
    Vacant,
}

impl<T> Slot<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Occupied(v) => Some(v),
            Self::Vacant => None,
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, Self::Vacant)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Slot<T>>",
    into = "Vec<Slot<T>>",
    bound(
        serialize = "T: Serialize + Clone + Eq + Hash",
        deserialize = "T: Deserialize<'de> + Clone + Eq + Hash"
    )
)]
pub struct SlotList<T: Clone + Eq + Hash> {
    slots: Vec<Slot<T>>,
    vacant: BTreeSet<usize>,
    positions: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> SlotList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: BTreeSet::new(),
            positions: HashMap::new(),
        }
    }

    /// Insert `value` and return its slot position.
    ///
    /// Reuses the lowest vacant slot, else appends. A value that is already
    /// live keeps its slot and is not duplicated.
    pub fn insert(&mut self, value: T) -> usize {
        if let Some(&pos) = self.positions.get(&value) {
            return pos;
        }
        let pos = match self.vacant.pop_first() {
            Some(pos) => {
                self.slots[pos] = Slot::Occupied(value.clone());
                pos
            }
            None => {
                self.slots.push(Slot::Occupied(value.clone()));
                self.slots.len() - 1
            }
        };
        self.positions.insert(value, pos);
        pos
    }

    /// Vacate the slot holding `value`. Returns the vacated position.
    pub fn remove(&mut self, value: &T) -> Option<usize> {
        let pos = self.positions.remove(value)?;
        self.slots[pos] = Slot::Vacant;
        self.vacant.insert(pos);
        Some(pos)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    pub fn position(&self, value: &T) -> Option<usize> {
        self.positions.get(value).copied()
    }

    /// Raw layout, vacant slots included.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Live values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Slot::value)
    }

    /// Number of slots, vacant ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.positions.len()
    }
}

impl<T: Clone + Eq + Hash> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> From<SlotList<T>> for Vec<Slot<T>> {
    fn from(list: SlotList<T>) -> Self {
        list.slots
    }
}

impl<T: Clone + Eq + Hash> TryFrom<Vec<Slot<T>>> for SlotList<T> {
    type Error = String;

    fn try_from(slots: Vec<Slot<T>>) -> Result<Self, Self::Error> {
        let mut vacant = BTreeSet::new();
        let mut positions = HashMap::with_capacity(slots.len());
        for (pos, slot) in slots.iter().enumerate() {
            match slot {
                Slot::Vacant => {
                    vacant.insert(pos);
                }
                Slot::Occupied(v) => {
                    if positions.insert(v.clone(), pos).is_some() {
                        return Err(format!("value live in more than one slot (second at {pos})"));
                    }
                }
            }
        }
        Ok(Self {
            slots,
            vacant,
            positions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_leaves_vacant_slot() {
        let mut list = SlotList::new();
        list.insert(7u64);
        assert_eq!(list.remove(&7), Some(0));
        assert_eq!(list.slots(), &[Slot::Vacant]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.live_count(), 0);
        assert!(!list.contains(&7));
    }

    #[test]
    fn insert_reuses_lowest_vacancy() {
        let mut list = SlotList::new();
        for v in [1u64, 2, 3, 4] {
            list.insert(v);
        }
        list.remove(&3);
        list.remove(&2);
        assert_eq!(list.insert(9), 1);
        assert_eq!(list.insert(10), 2);
        assert_eq!(list.insert(11), 4);
        let live: Vec<u64> = list.iter().copied().collect();
        assert_eq!(live, vec![1, 9, 10, 4, 11]);
    }

    #[test]
    fn live_value_is_never_duplicated() {
        let mut list = SlotList::new();
        assert_eq!(list.insert(5u64), 0);
        assert_eq!(list.insert(5u64), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn removing_missing_value_is_noop() {
        let mut list: SlotList<u64> = SlotList::new();
        list.insert(1);
        assert_eq!(list.remove(&2), None);
        assert_eq!(list.slots(), &[Slot::Occupied(1)]);
    }

    #[test]
    fn decode_rebuilds_indices() {
        let raw = vec![Slot::Occupied(1u64), Slot::Vacant, Slot::Occupied(3)];
        let mut list = SlotList::try_from(raw).unwrap();
        assert!(list.contains(&3));
        assert_eq!(list.position(&3), Some(2));
        assert_eq!(list.insert(8), 1);
    }

    #[test]
    fn decode_rejects_duplicate_live_values() {
        let raw = vec![Slot::Occupied(1u64), Slot::Occupied(1)];
        assert!(SlotList::try_from(raw).is_err());
    }
}
