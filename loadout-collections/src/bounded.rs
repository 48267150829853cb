//! Fixed-capacity contiguous sequence with gap-free removal.

use crate::Full;

/// An ordered sequence that never grows past the capacity it was built with.
///
/// Insertion appends at the current length. Removal shifts every later
/// element one position left, so elements always occupy `0..len` with no
/// holes, in insertion order until something reorders them.
///
/// # Example
///
/// ```
/// use loadout_collections::BoundedArray;
///
/// let mut arr: BoundedArray<u32> = BoundedArray::with_capacity(2);
/// arr.try_push(1).unwrap();
/// arr.try_push(2).unwrap();
/// assert_eq!(arr.try_push(3).unwrap_err().into_inner(), 3);
///
/// assert_eq!(arr.remove(0), Some(1));
/// assert_eq!(arr.as_slice(), &[2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedArray<T> {
    /// Creates an empty array holding at most `capacity` elements.
    ///
    /// The whole capacity is reserved up front.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another push would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Appends a value at the current length.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` without touching the array when it is full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Position of the first element matching `pred`.
    #[inline]
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().position(pred)
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Current contents in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutable view for in-place reordering.
    ///
    /// Length cannot change through a slice, so capacity still holds.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterator over elements in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, T> IntoIterator for &'a BoundedArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
