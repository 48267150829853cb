//! Satchel - items in a singly linked chain.
//!
//! The satchel grows without bound and offers only sequential access:
//! append at the tail, remove by name, walk, linear search. It has no sort
//! and no binary search, which makes it the baseline the backpack's
//! contiguous layout is measured against.

use loadout_collections::search::linear_search;
use loadout_collections::{AllocError, Chain, Probe};
use tracing::{debug, trace, warn};

use crate::record::Item;
use crate::{InventoryError, InventoryResult};

/// Items in insertion order, one node per item.
///
/// Dropping the satchel releases every remaining node.
///
/// # Example
///
/// ```
/// use loadout_inventory::{Item, Satchel};
///
/// let mut satchel = Satchel::new();
/// satchel.insert_tail(Item::new("Corda", "util", 1)).unwrap();
/// satchel.insert_tail(Item::new("Faca", "arma", 1)).unwrap();
///
/// let probe = satchel.search_linear("Faca");
/// assert_eq!(probe.index, Some(1));
/// assert_eq!(probe.comparisons, 2);
/// ```
#[derive(Debug, Default)]
pub struct Satchel {
    chain: Chain<Item>,
}

impl Satchel {
    /// Creates an empty satchel. Does not allocate.
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Number of items held.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the satchel holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// First item in the chain.
    #[inline]
    pub fn front(&self) -> Option<&Item> {
        self.chain.front()
    }

    /// Last item in the chain.
    #[inline]
    pub fn back(&self) -> Option<&Item> {
        self.chain.back()
    }

    /// Appends `item` after the current tail.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Alloc`] if no node could be allocated. The
    /// chain is untouched in that case.
    pub fn insert_tail(&mut self, item: Item) -> InventoryResult<()> {
        match self.chain.push_back(item) {
            Ok(_) => {
                debug!(len = self.chain.len(), "satchel insert");
                Ok(())
            }
            Err(AllocError(link)) => {
                let item = link.into_value();
                warn!(name = item.name(), "satchel node allocation failed");
                Err(InventoryError::Alloc {
                    name: item.name().to_owned(),
                })
            }
        }
    }

    /// Removes the first item named `name`.
    ///
    /// Its predecessor (or the chain head) is relinked to its successor and
    /// its node is released.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no item has that name.
    pub fn remove_by_name(&mut self, name: &str) -> InventoryResult<Item> {
        let item = self
            .chain
            .remove_first(|item| item.name() == name)
            .ok_or_else(|| InventoryError::not_found(name))?;
        debug!(name, len = self.chain.len(), "satchel remove");
        Ok(item)
    }

    /// Copies of the items in chain order.
    pub fn list(&self) -> Vec<Item> {
        self.chain.iter().cloned().collect()
    }

    /// Items in chain order, without copying.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Item> + '_ {
        self.chain.iter()
    }

    /// Sequential search from the head.
    ///
    /// Counts one comparison per node visited, the match included. The
    /// returned index is the node's position in the chain.
    pub fn search_linear(&self, name: &str) -> Probe {
        let probe = linear_search(&self.chain, |item| item.name() == name);
        trace!(name, ?probe, "satchel linear search");
        probe
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        let released = self.chain.len();
        self.chain.clear();
        debug!(released, "satchel cleared");
    }
}
