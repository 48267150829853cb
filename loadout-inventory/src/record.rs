//! Inventory records.
//!
//! Both record types are flat: two bounded-width strings and one integer.
//! Widths are counted in characters. The plain constructors store fields
//! exactly as given, so a record is always found again under the name it
//! was built with; the `try_new` constructors enforce the widths and report
//! an oversized field instead of cutting it.

use core::cmp::Ordering;
use core::fmt;
use core::ops::RangeInclusive;

use loadout_collections::Probe;
use loadout_collections::search::binary_search_by_key;
use serde::{Deserialize, Serialize};

use crate::{InventoryError, InventoryResult};

/// Maximum length of a record name, in characters.
pub const NAME_WIDTH: usize = 29;

/// Maximum length of a record kind, in characters.
pub const KIND_WIDTH: usize = 19;

/// Priorities accepted when a component is entered.
///
/// Only the entry layer enforces this; stored components are not
/// re-validated.
pub const PRIORITY_RANGE: RangeInclusive<i32> = 1..=10;

/// Records identified by name.
///
/// Names compare byte-wise and case-sensitively. Removal, linear search and
/// binary search all key on this.
pub trait Named {
    /// The identity key.
    fn name(&self) -> &str;
}

/// Orders two records by name, ascending.
#[inline]
pub fn by_name<R: Named>(a: &R, b: &R) -> Ordering {
    a.name().cmp(b.name())
}

/// Binary search by name over records sorted ascending by name.
///
/// `sorted` must be in [`by_name`] order. The search does not check this;
/// on other orders the result is unspecified.
pub fn search_by_name<R: Named>(sorted: &[R], name: &str) -> Probe {
    binary_search_by_key(sorted, name, R::name, |a, b| a.cmp(b))
}

fn check_width(field: &'static str, value: &str, max: usize) -> InventoryResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(InventoryError::FieldTooLong { field, max, len });
    }
    Ok(())
}

/// A backpack entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    kind: String,
    quantity: i32,
}

impl Item {
    /// Creates an item with `name` and `kind` stored as given.
    ///
    /// # Example
    ///
    /// ```
    /// use loadout_inventory::Item;
    ///
    /// let item = Item::new("Medkit", "cura", 3);
    /// assert_eq!(item.name(), "Medkit");
    /// assert_eq!(item.quantity(), 3);
    /// ```
    pub fn new(name: impl Into<String>, kind: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            quantity,
        }
    }

    /// Creates an item, rejecting a name over [`NAME_WIDTH`] or a kind over
    /// [`KIND_WIDTH`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::FieldTooLong`] naming the first oversized
    /// field.
    ///
    /// # Example
    ///
    /// ```
    /// use loadout_inventory::{InventoryError, Item};
    ///
    /// assert!(Item::try_new("Medkit", "cura", 3).is_ok());
    /// let err = Item::try_new("Kit de primeiros socorros avancado", "cura", 1).unwrap_err();
    /// assert!(matches!(err, InventoryError::FieldTooLong { field: "name", .. }));
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: i32,
    ) -> InventoryResult<Self> {
        let item = Self::new(name, kind, quantity);
        check_width("name", &item.name, NAME_WIDTH)?;
        check_width("kind", &item.kind, KIND_WIDTH)?;
        Ok(item)
    }

    /// Item name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item kind, e.g. `"arma"` or `"cura"`.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Quantity held. Any sign is accepted.
    #[inline]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl Named for Item {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<w_name$} {:<w_kind$} {}",
            self.name,
            self.kind,
            self.quantity,
            w_name = NAME_WIDTH,
            w_kind = KIND_WIDTH
        )
    }
}

/// A tower component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    name: String,
    kind: String,
    priority: i32,
}

impl Component {
    /// Creates a component with every field stored as given.
    ///
    /// `priority` is not checked either; see [`PRIORITY_RANGE`].
    pub fn new(name: impl Into<String>, kind: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            priority,
        }
    }

    /// Creates a component, rejecting oversized fields like
    /// [`Item::try_new`]. Priority is still stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::FieldTooLong`] naming the first oversized
    /// field.
    pub fn try_new(
        name: impl Into<String>,
        kind: impl Into<String>,
        priority: i32,
    ) -> InventoryResult<Self> {
        let component = Self::new(name, kind, priority);
        check_width("name", &component.name, NAME_WIDTH)?;
        check_width("kind", &component.kind, KIND_WIDTH)?;
        Ok(component)
    }

    /// Component name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component kind, e.g. `"propulsao"`.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Assembly priority; lower sorts first.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns `true` if the priority is within [`PRIORITY_RANGE`].
    #[inline]
    pub fn priority_in_range(&self) -> bool {
        PRIORITY_RANGE.contains(&self.priority)
    }
}

impl Named for Component {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<w_name$} {:<w_kind$} {}",
            self.name,
            self.kind,
            self.priority,
            w_name = NAME_WIDTH,
            w_kind = KIND_WIDTH
        )
    }
}
