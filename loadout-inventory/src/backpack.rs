//! Backpack - items in a fixed-capacity contiguous array.

use loadout_collections::search::linear_search;
use loadout_collections::sort::bubble_sort_by;
use loadout_collections::{BoundedArray, Full, Probe};
use tracing::{debug, trace, warn};

use crate::record::{Item, by_name, search_by_name};
use crate::{Capacities, InventoryError, InventoryResult};

/// Items in insertion order, up to a fixed capacity.
///
/// Order only changes through [`sort_by_name`](Self::sort_by_name).
/// [`search_binary`](Self::search_binary) trusts that the current order is
/// ascending by name; call `sort_by_name` first.
///
/// # Example
///
/// ```
/// use loadout_inventory::{Backpack, Item};
///
/// let mut pack = Backpack::new();
/// pack.insert(Item::new("Rifle", "arma", 1)).unwrap();
/// pack.insert(Item::new("Medkit", "cura", 3)).unwrap();
///
/// pack.sort_by_name();
/// let probe = pack.search_binary("Rifle");
/// assert_eq!(probe.index, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Backpack {
    items: BoundedArray<Item>,
}

impl Backpack {
    const STORE: &'static str = "backpack";

    /// Creates an empty backpack with the default capacity.
    pub fn new() -> Self {
        Self::with_capacities(&Capacities::default())
    }

    /// Creates an empty backpack sized by `caps.backpack`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is 0. [`Capacities::validate`] rejects that.
    pub fn with_capacities(caps: &Capacities) -> Self {
        Self {
            items: BoundedArray::with_capacity(caps.backpack),
        }
    }

    /// Number of items held.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the backpack holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another insert would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends `item` after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Full`] when the backpack is at capacity.
    /// Nothing is changed in that case.
    pub fn insert(&mut self, item: Item) -> InventoryResult<()> {
        match self.items.try_push(item) {
            Ok(()) => {
                debug!(len = self.items.len(), "backpack insert");
                Ok(())
            }
            Err(Full(item)) => {
                warn!(capacity = self.capacity(), name = item.name(), "backpack full");
                Err(InventoryError::Full {
                    store: Self::STORE,
                    capacity: self.capacity(),
                    rejected: item.name().to_owned(),
                })
            }
        }
    }

    /// Removes the first item named `name`, closing the gap it leaves.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no item has that name.
    pub fn remove_by_name(&mut self, name: &str) -> InventoryResult<Item> {
        let pos = self
            .items
            .position(|item| item.name() == name)
            .ok_or_else(|| InventoryError::not_found(name))?;
        let item = self
            .items
            .remove(pos)
            .ok_or_else(|| InventoryError::not_found(name))?;
        debug!(name, pos, len = self.items.len(), "backpack remove");
        Ok(item)
    }

    /// Items in current order.
    #[inline]
    pub fn list(&self) -> &[Item] {
        self.items.as_slice()
    }

    /// Item at `index` in current order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Sequential search from the first item.
    ///
    /// Counts one comparison per item visited, the match included.
    pub fn search_linear(&self, name: &str) -> Probe {
        let probe = linear_search(&self.items, |item| item.name() == name);
        trace!(name, ?probe, "backpack linear search");
        probe
    }

    /// Bubble-sorts the items ascending by name, in place.
    ///
    /// Returns the comparison count, always `n(n-1)/2`.
    pub fn sort_by_name(&mut self) -> u64 {
        let comparisons = bubble_sort_by(self.items.as_mut_slice(), by_name);
        debug!(len = self.items.len(), comparisons, "backpack sorted by name");
        comparisons
    }

    /// Binary search by name over the current order.
    ///
    /// The items must currently be ascending by name, e.g. straight after
    /// [`sort_by_name`](Self::sort_by_name). Otherwise the result is
    /// unspecified.
    pub fn search_binary(&self, name: &str) -> Probe {
        let probe = search_by_name(self.list(), name);
        trace!(name, ?probe, "backpack binary search");
        probe
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Backpack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_of(names: &[&str]) -> Backpack {
        let mut pack = Backpack::new();
        for (i, name) in names.iter().enumerate() {
            pack.insert(Item::new(*name, "arma", i as i32)).unwrap();
        }
        pack
    }

    fn names(pack: &Backpack) -> Vec<&str> {
        pack.list().iter().map(Item::name).collect()
    }

    #[test]
    fn new_uses_default_capacity() {
        let pack = Backpack::new();
        assert!(pack.is_empty());
        assert_eq!(pack.capacity(), 10);
    }

    #[test]
    fn insert_then_remove_restores_length() {
        let mut pack = pack_of(&["Rifle", "Corda"]);
        let item = Item::new("Medkit", "cura", 3);

        pack.insert(item.clone()).unwrap();
        assert_eq!(pack.len(), 3);

        assert_eq!(pack.remove_by_name("Medkit").unwrap(), item);
        assert_eq!(pack.len(), 2);
        assert_eq!(names(&pack), ["Rifle", "Corda"]);
    }

    #[test]
    fn insert_past_capacity_is_full() {
        let caps = Capacities { backpack: 2, ..Capacities::default() };
        let mut pack = Backpack::with_capacities(&caps);
        pack.insert(Item::new("a", "k", 1)).unwrap();
        pack.insert(Item::new("b", "k", 1)).unwrap();

        let err = pack.insert(Item::new("c", "k", 1)).unwrap_err();
        assert_eq!(
            err,
            InventoryError::Full {
                store: "backpack",
                capacity: 2,
                rejected: "c".into()
            }
        );
        assert_eq!(names(&pack), ["a", "b"]);
    }

    #[test]
    fn remove_compacts_left() {
        let mut pack = pack_of(&["a", "b", "c", "d"]);
        pack.remove_by_name("b").unwrap();
        assert_eq!(names(&pack), ["a", "c", "d"]);
        assert_eq!(pack.get(1).unwrap().name(), "c");
        assert!(pack.get(3).is_none());
    }

    #[test]
    fn remove_missing_is_not_found_and_unchanged() {
        let mut pack = pack_of(&["a", "b"]);
        let err = pack.remove_by_name("z").unwrap_err();
        assert_eq!(err, InventoryError::NotFound { name: "z".into() });
        assert_eq!(names(&pack), ["a", "b"]);
    }

    #[test]
    fn remove_takes_first_duplicate() {
        let mut pack = Backpack::new();
        pack.insert(Item::new("Bala", "arma", 1)).unwrap();
        pack.insert(Item::new("Bala", "arma", 2)).unwrap();

        assert_eq!(pack.remove_by_name("Bala").unwrap().quantity(), 1);
        assert_eq!(pack.list()[0].quantity(), 2);
    }

    #[test]
    fn remove_is_case_sensitive() {
        let mut pack = pack_of(&["Rifle"]);
        assert!(pack.remove_by_name("rifle").is_err());
    }

    #[test]
    fn linear_search_counts_visits() {
        let pack = pack_of(&["c", "a", "b"]);
        assert_eq!(pack.search_linear("a"), Probe::hit(1, 2));
        assert_eq!(pack.search_linear("c"), Probe::hit(0, 1));
        assert_eq!(pack.search_linear("x"), Probe::miss(3));
    }

    #[test]
    fn linear_search_on_empty() {
        assert_eq!(Backpack::new().search_linear("a"), Probe::miss(0));
    }

    #[test]
    fn sort_by_name_orders_and_counts() {
        let mut pack = pack_of(&["d", "b", "a", "c"]);
        assert_eq!(pack.sort_by_name(), 6);
        assert_eq!(names(&pack), ["a", "b", "c", "d"]);
    }

    #[test]
    fn sort_by_name_twice_is_idempotent() {
        let mut pack = pack_of(&["Rifle", "Faca", "Medkit", "Bala"]);
        let first = pack.sort_by_name();
        let order: Vec<String> = names(&pack).into_iter().map(String::from).collect();

        let second = pack.sort_by_name();
        assert_eq!(first, second);
        assert_eq!(names(&pack), order);
    }

    #[test]
    fn binary_search_after_sort_finds_every_item() {
        let mut pack = pack_of(&["j", "c", "h", "a", "e", "b", "i", "d", "g", "f"]);
        pack.sort_by_name();

        for (i, item) in pack.list().iter().enumerate() {
            let probe = pack.search_binary(item.name());
            assert_eq!(probe.index, Some(i));
            assert!(probe.comparisons <= 4);
        }
        assert!(!pack.search_binary("k").found());
    }

    #[test]
    fn clear_empties() {
        let mut pack = pack_of(&["a"]);
        pack.clear();
        assert!(pack.is_empty());
    }
}
