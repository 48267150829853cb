//! Singly linked chain over slot storage.
//!
//! Each node lives in a [`Storage`] slot and records only its successor's
//! index. The chain itself keeps head, tail and length. Removing a node
//! hands its slot back to the storage in the same call that redirects the
//! predecessor's link, so a released slot is never reachable from the chain.

use core::marker::PhantomData;

use crate::{Index, NodePool, Storage};

/// A node of a [`Chain`]: a value and the index of its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<T, Idx: Index = u32> {
    value: T,
    next: Idx,
}

impl<T, Idx: Index> Link<T, Idx> {
    fn new(value: T) -> Self {
        Self {
            value,
            next: Idx::NONE,
        }
    }

    /// The stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Successor's index, or `Idx::NONE` at the tail.
    #[inline]
    pub fn next(&self) -> Idx {
        self.next
    }

    /// Consumes the node, returning its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// A forward-only linked sequence that owns its storage.
///
/// Appends go after the tail in O(1). Removal by predicate walks from the
/// head with a trailing predecessor and relinks around the match.
///
/// # Example
///
/// ```
/// use loadout_collections::Chain;
///
/// let mut chain: Chain<&str> = Chain::new();
/// chain.push_back("a").unwrap();
/// chain.push_back("b").unwrap();
/// chain.push_back("c").unwrap();
///
/// assert_eq!(chain.remove_first(|v| *v == "b"), Some("b"));
/// let values: Vec<_> = chain.iter().copied().collect();
/// assert_eq!(values, ["a", "c"]);
/// ```
pub struct Chain<T, Idx = u32, S = NodePool<Link<T, Idx>, Idx>>
where
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
    storage: S,
    head: Idx,
    tail: Idx,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> Chain<T> {
    /// Creates an empty chain backed by a [`NodePool`]. Does not allocate.
    pub const fn new() -> Self {
        Self {
            storage: NodePool::new(),
            head: u32::NONE,
            tail: u32::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx, S> Chain<T, Idx, S>
where
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
    /// Creates an empty chain over caller-supplied storage.
    ///
    /// # Panics
    ///
    /// Panics if `storage` already holds values.
    pub fn with_storage(storage: S) -> Self {
        assert!(storage.is_empty(), "chain storage must start empty");
        Self {
            storage,
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of nodes in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Head node's index, or `Idx::NONE` if empty.
    #[inline]
    pub fn head(&self) -> Idx {
        self.head
    }

    /// Tail node's index, or `Idx::NONE` if empty.
    #[inline]
    pub fn tail(&self) -> Idx {
        self.tail
    }

    /// Returns the value at the head.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage.get(self.head).map(Link::value)
    }

    /// Returns the value at the tail.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.storage.get(self.tail).map(Link::value)
    }

    /// Returns the node stored at `idx`.
    #[inline]
    pub fn link(&self, idx: Idx) -> Option<&Link<T, Idx>> {
        self.storage.get(idx)
    }

    /// Appends a value after the tail, or makes it the head of an empty chain.
    ///
    /// Returns the index of the new node.
    ///
    /// # Errors
    ///
    /// Returns the storage's error when no slot could be obtained. The chain
    /// is unchanged in that case. For [`NodePool`] the error carries the
    /// unlinked node; [`Link::into_value`] recovers the value.
    pub fn push_back(&mut self, value: T) -> Result<Idx, S::Error> {
        let idx = self.storage.try_insert(Link::new(value))?;

        if self.tail.is_some() {
            self.storage
                .get_mut(self.tail)
                .expect("tail points at a vacant slot")
                .next = idx;
        } else {
            self.head = idx;
        }

        self.tail = idx;
        self.len += 1;
        Ok(idx)
    }

    /// Removes the first value matching `pred` and returns it.
    ///
    /// The predecessor's link (or the head) is redirected to the removed
    /// node's successor and the node's slot is released. Returns `None`
    /// without touching the chain when nothing matches.
    pub fn remove_first<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = Idx::NONE;
        let mut cur = self.head;

        while cur.is_some() {
            let link = self.storage.get(cur).expect("link points at a vacant slot");
            if pred(&link.value) {
                return Some(self.unlink(prev, cur));
            }
            prev = cur;
            cur = link.next;
        }

        None
    }

    /// Detaches `idx` from behind `prev` and releases its slot.
    fn unlink(&mut self, prev: Idx, idx: Idx) -> T {
        let removed = self
            .storage
            .remove(idx)
            .expect("unlinking a vacant slot");

        if prev.is_some() {
            self.storage
                .get_mut(prev)
                .expect("predecessor points at a vacant slot")
                .next = removed.next;
        } else {
            self.head = removed.next;
        }

        if self.tail == idx {
            self.tail = prev;
        }

        self.len -= 1;
        removed.value
    }

    /// Removes and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        Some(self.unlink(Idx::NONE, self.head))
    }

    /// Releases every node, head to tail.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterator over values, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx, S> {
        Iter {
            storage: &self.storage,
            cur: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T, Idx, S> core::fmt::Debug for Chain<T, Idx, S>
where
    T: core::fmt::Debug,
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, Idx, S> IntoIterator for &'a Chain<T, Idx, S>
where
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Idx, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Chain`]'s values, head to tail.
pub struct Iter<'a, T, Idx, S>
where
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
    storage: &'a S,
    cur: Idx,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, Idx, S> Iterator for Iter<'a, T, Idx, S>
where
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cur.is_none() {
            return None;
        }
        let storage = self.storage;
        let link = storage.get(self.cur)?;
        self.cur = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, Idx, S> ExactSizeIterator for Iter<'a, T, Idx, S>
where
    Idx: Index,
    S: Storage<Link<T, Idx>, Index = Idx>,
{
}
