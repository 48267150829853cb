//! Tower - components and the three counted sort strategies.
//!
//! The tower keeps its components in entry order. Sorting for display
//! works on a copy ([`Tower::sorted`], [`Tower::timed`]) and leaves that
//! order alone; only [`Tower::sort_in_place`] reorders the canonical
//! collection.
//!
//! | Strategy | Algorithm | Key |
//! |----------|-----------|-----|
//! | [`SortStrategy::BubbleByName`] | bubble | name, byte-wise |
//! | [`SortStrategy::InsertionByKind`] | insertion | kind, byte-wise |
//! | [`SortStrategy::SelectionByPriority`] | selection | priority, numeric |

use core::fmt;

use loadout_collections::sort::{bubble_sort_by, insertion_sort_by, selection_sort_by};
use loadout_collections::{BoundedArray, Full, Probe};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::record::{Component, by_name, search_by_name};
use crate::timing::{Timed, measure, nanos};
use crate::{Capacities, InventoryError, InventoryResult};

/// Bubble sort by name. Always `n(n-1)/2` comparisons.
pub fn bubble_sort_by_name(components: &mut [Component]) -> u64 {
    bubble_sort_by(components, by_name)
}

/// Insertion sort by kind.
pub fn insertion_sort_by_kind(components: &mut [Component]) -> u64 {
    insertion_sort_by(components, |a, b| a.kind().cmp(b.kind()))
}

/// Selection sort by priority. Always `n(n-1)/2` comparisons.
pub fn selection_sort_by_priority(components: &mut [Component]) -> u64 {
    selection_sort_by(components, |a, b| a.priority().cmp(&b.priority()))
}

/// Which sort to run, and therefore which key to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Bubble sort, ascending by name.
    BubbleByName,
    /// Insertion sort, ascending by kind.
    InsertionByKind,
    /// Selection sort, ascending by priority.
    SelectionByPriority,
}

impl SortStrategy {
    /// Every strategy, in menu order.
    pub const ALL: [Self; 3] = [
        Self::BubbleByName,
        Self::InsertionByKind,
        Self::SelectionByPriority,
    ];

    /// Human-readable name for reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BubbleByName => "bubble sort (by name)",
            Self::InsertionByKind => "insertion sort (by kind)",
            Self::SelectionByPriority => "selection sort (by priority)",
        }
    }

    /// The sort function this strategy dispatches to.
    pub const fn sort_fn(self) -> fn(&mut [Component]) -> u64 {
        match self {
            Self::BubbleByName => bubble_sort_by_name,
            Self::InsertionByKind => insertion_sort_by_kind,
            Self::SelectionByPriority => selection_sort_by_priority,
        }
    }

    /// Sorts `components` in place and returns the comparison count.
    #[inline]
    pub fn run(self, components: &mut [Component]) -> u64 {
        (self.sort_fn())(components)
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A sorted copy of the tower and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted {
    /// The components in sorted order.
    pub components: Vec<Component>,
    /// Comparisons the sort made.
    pub comparisons: u64,
}

/// A sorted copy of the tower with its comparison count and elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedSort {
    /// The components in sorted order.
    pub components: Vec<Component>,
    /// Comparison count and elapsed time.
    pub timing: Timed,
}

/// Result of looking a component up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLookup {
    /// The component, if present.
    pub component: Option<Component>,
    /// Comparisons spent sorting the copy by name.
    pub sort_comparisons: u64,
    /// Where the binary search landed in the sorted copy and what it cost.
    pub probe: Probe,
}

/// Up to a fixed number of components, in entry order.
///
/// # Example
///
/// ```
/// use loadout_inventory::{Component, SortStrategy, Tower};
///
/// let mut tower = Tower::new();
/// tower.push(Component::new("Motor", "propulsao", 5)).unwrap();
/// tower.push(Component::new("Escudo", "suporte", 2)).unwrap();
///
/// let sorted = tower.sorted(SortStrategy::SelectionByPriority);
/// assert_eq!(sorted.components[0].name(), "Escudo");
/// assert_eq!(sorted.comparisons, 1);
///
/// // The tower itself is still in entry order.
/// assert_eq!(tower.list()[0].name(), "Motor");
/// ```
#[derive(Debug, Clone)]
pub struct Tower {
    components: BoundedArray<Component>,
}

impl Tower {
    const STORE: &'static str = "tower";

    /// Creates an empty tower with the default capacity.
    pub fn new() -> Self {
        Self::with_capacities(&Capacities::default())
    }

    /// Creates an empty tower sized by `caps.tower`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is 0. [`Capacities::validate`] rejects that.
    pub fn with_capacities(caps: &Capacities) -> Self {
        Self {
            components: BoundedArray::with_capacity(caps.tower),
        }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the tower holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` if another push would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.components.is_full()
    }

    /// Fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.components.capacity()
    }

    /// Appends a component.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Full`] when the tower is at capacity.
    pub fn push(&mut self, component: Component) -> InventoryResult<()> {
        match self.components.try_push(component) {
            Ok(()) => {
                debug!(len = self.components.len(), "tower push");
                Ok(())
            }
            Err(Full(component)) => {
                warn!(capacity = self.capacity(), name = component.name(), "tower full");
                Err(InventoryError::Full {
                    store: Self::STORE,
                    capacity: self.capacity(),
                    rejected: component.name().to_owned(),
                })
            }
        }
    }

    /// Components in current order.
    #[inline]
    pub fn list(&self) -> &[Component] {
        self.components.as_slice()
    }

    /// Sorts a copy with `strategy`; the tower keeps its order.
    pub fn sorted(&self, strategy: SortStrategy) -> Sorted {
        let mut components = self.list().to_vec();
        let comparisons = strategy.run(&mut components);
        debug!(%strategy, comparisons, "tower sorted copy");
        Sorted {
            components,
            comparisons,
        }
    }

    /// Copy sorted by name with bubble sort.
    pub fn sorted_by_name(&self) -> Sorted {
        self.sorted(SortStrategy::BubbleByName)
    }

    /// Copy sorted by kind with insertion sort.
    pub fn sorted_by_kind(&self) -> Sorted {
        self.sorted(SortStrategy::InsertionByKind)
    }

    /// Copy sorted by priority with selection sort.
    pub fn sorted_by_priority(&self) -> Sorted {
        self.sorted(SortStrategy::SelectionByPriority)
    }

    /// Sorts a copy with `strategy` under the clock.
    pub fn timed(&self, strategy: SortStrategy) -> TimedSort {
        let mut components = self.list().to_vec();
        let timing = measure(&mut components, strategy.sort_fn());
        debug!(
            %strategy,
            comparisons = timing.comparisons,
            elapsed_ns = nanos(timing.elapsed),
            "tower timed sort"
        );
        TimedSort { components, timing }
    }

    /// Reorders the tower itself with `strategy`.
    ///
    /// Returns the comparison count.
    pub fn sort_in_place(&mut self, strategy: SortStrategy) -> u64 {
        let comparisons = strategy.run(self.components.as_mut_slice());
        debug!(%strategy, comparisons, "tower sorted in place");
        comparisons
    }

    /// Finds a component by name: sorts a copy by name, then binary
    /// searches it.
    ///
    /// The probe's index refers to the sorted copy, not to [`list`](Self::list).
    pub fn locate(&self, name: &str) -> KeyLookup {
        let Sorted {
            components,
            comparisons,
        } = self.sorted_by_name();
        let probe = search_by_name(&components, name);
        debug!(name, found = probe.found(), probes = probe.comparisons, "tower locate");
        KeyLookup {
            component: probe.index.map(|i| components[i].clone()),
            sort_comparisons: comparisons,
            probe,
        }
    }
}

impl Default for Tower {
    fn default() -> Self {
        Self::new()
    }
}

/// Binary search by name over components already sorted by name.
///
/// `sorted` must be ascending by name, e.g. [`Sorted::components`] from
/// [`Tower::sorted_by_name`]. This is not checked.
#[inline]
pub fn search_binary(sorted: &[Component], name: &str) -> Probe {
    search_by_name(sorted, name)
}
