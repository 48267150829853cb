//! Link index for arena-backed chains.
//!
//! A chain node stores the arena slot of its successor. The largest value of
//! the index type is reserved as the terminator, so a link is exactly as
//! wide as the index itself. The flip side is that an arena addressed by
//! `u16` holds at most `u16::MAX` slots: [`Index::from_slot`] refuses any
//! position that would collide with the terminator or not fit at all.

use core::fmt;

/// A slot position in a node arena, with a reserved terminator.
///
/// # Example
///
/// ```
/// use loadout_collections::Index;
///
/// assert_eq!(u16::from_slot(5), Some(5));
/// assert_eq!(u16::from_slot(u16::MAX as usize), None);
/// assert_eq!(u16::from_slot(70_000), None);
/// assert!(u16::NONE.is_none());
/// ```
pub trait Index: Copy + Eq + fmt::Debug + 'static {
    /// The terminator: "no successor" in a link, "empty" for head and tail.
    const NONE: Self;

    /// Arena position this index addresses. `NONE` maps past every slot.
    fn slot(self) -> usize;

    /// Index for arena position `slot`, or `None` when the position is the
    /// terminator or does not fit the type.
    fn from_slot(slot: usize) -> Option<Self>;

    /// `true` at the end of a chain.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// `true` when this points at a slot.
    #[inline]
    fn is_some(self) -> bool {
        self != Self::NONE
    }
}

impl Index for u16 {
    const NONE: Self = u16::MAX;

    #[inline]
    fn slot(self) -> usize {
        usize::from(self)
    }

    #[inline]
    fn from_slot(slot: usize) -> Option<Self> {
        u16::try_from(slot).ok().filter(|&i| i != Self::NONE)
    }
}

impl Index for u32 {
    const NONE: Self = u32::MAX;

    #[inline]
    fn slot(self) -> usize {
        // Every supported target has at least 32-bit pointers.
        self as usize
    }

    #[inline]
    fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok().filter(|&i| i != Self::NONE)
    }
}

impl Index for usize {
    const NONE: Self = usize::MAX;

    #[inline]
    fn slot(self) -> usize {
        self
    }

    #[inline]
    fn from_slot(slot: usize) -> Option<Self> {
        Some(slot).filter(|&i| i != Self::NONE)
    }
}
