//! Slot storage with stable indices for node-based containers.
//!
//! A [`Chain`](crate::Chain) never holds its nodes directly. Nodes live in a
//! [`Storage`] and the chain threads successor indices through them, so a
//! node is released by handing its slot back to the storage in the same
//! step that unlinks it.

use crate::Index;

use std::marker::PhantomData;

/// Slot storage with stable indices.
///
/// # Requirements
///
/// - **Stable indices**: an index stays valid until its slot is removed
/// - **Slot reuse**: removed slots may be handed out again by later inserts
///
/// # Implementations
///
/// - [`NodePool<T>`] - growable, reports allocation failure (in this crate)
/// - `slab::Slab<T>` - growable, aborts on allocation failure (feature `slab`)
pub trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Error type for failed insertions.
    ///
    /// - [`AllocError<T>`] for [`NodePool`]
    /// - `Infallible` for `slab::Slab`
    type Error;

    /// Inserts a value, returning its stable index.
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error>;

    /// Removes and returns the value at `index`, if present.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error returned when a fixed-capacity container is full.
///
/// Carries the value that could not be inserted so the caller keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "container is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

/// Error returned when a growable storage could not obtain memory for a
/// new slot.
///
/// Storage contents are untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError<T>(pub T);

impl<T> AllocError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for AllocError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "node allocation failed")
    }
}

impl<T: core::fmt::Debug> std::error::Error for AllocError<T> {}

// =============================================================================
// NodePool - growable arena, free-stack slot reuse, fallible growth
// =============================================================================

enum Slot<T> {
    Occupied(T),
    Vacant,
}

/// Growable slot arena that reports allocation failure instead of aborting.
///
/// Freed slots go on a free stack and are reused before the arena grows.
/// The free stack is always reserved for every slot, so [`remove`] never
/// allocates.
///
/// [`remove`]: Storage::remove
///
/// # Example
///
/// ```
/// use loadout_collections::{NodePool, Storage};
///
/// let mut pool: NodePool<u64> = NodePool::new();
/// let a = pool.try_insert(42).unwrap();
/// assert_eq!(pool.get(a), Some(&42));
///
/// assert_eq!(pool.remove(a), Some(42));
/// let b = pool.try_insert(7).unwrap();
/// assert_eq!(a, b); // slot reused
/// ```
pub struct NodePool<T, Idx: Index = u32> {
    slots: Vec<Slot<T>>,
    free: Vec<Idx>,
    len: usize,
    _marker: PhantomData<Idx>,
}

impl<T, Idx: Index> NodePool<T, Idx> {
    /// Creates an empty pool. Does not allocate.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of slots the pool has grown to, occupied or not.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drops every value and forgets every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    fn grow(&mut self, value: T) -> Result<Idx, AllocError<T>> {
        let next = self.slots.len();
        let Some(idx) = Idx::from_slot(next) else {
            return Err(AllocError(value));
        };
        if self.slots.try_reserve(1).is_err() {
            return Err(AllocError(value));
        }
        let free_needed = next + 1 - self.free.len();
        if self.free.try_reserve(free_needed).is_err() {
            return Err(AllocError(value));
        }
        self.slots.push(Slot::Occupied(value));
        Ok(idx)
    }
}

impl<T, Idx: Index> Default for NodePool<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> Storage<T> for NodePool<T, Idx> {
    type Index = Idx;
    type Error = AllocError<T>;

    fn try_insert(&mut self, value: T) -> Result<Idx, AllocError<T>> {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx.slot()] = Slot::Occupied(value);
                idx
            }
            None => self.grow(value)?,
        };
        self.len += 1;
        Ok(idx)
    }

    fn remove(&mut self, index: Idx) -> Option<T> {
        let slot = self.slots.get_mut(index.slot())?;
        match core::mem::replace(slot, Slot::Vacant) {
            Slot::Occupied(value) => {
                self.free.push(index);
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant => None,
        }
    }

    #[inline]
    fn get(&self, index: Idx) -> Option<&T> {
        match self.slots.get(index.slot())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        match self.slots.get_mut(index.slot())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;
    type Error = core::convert::Infallible;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, index: Self::Index) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        slab::Slab::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        slab::Slab::get_mut(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }
}
