//! In-memory inventories over array and linked stores.
//!
//! Three stores share one record vocabulary:
//!
//! ```text
//! Backpack  - Items, fixed capacity, contiguous; sort + binary search
//! Satchel   - Items, unbounded, singly linked; sequential access only
//! Tower     - Components, fixed capacity; three counted sorts
//! ```
//!
//! Every search returns a [`Probe`](loadout_collections::Probe) and every sort
//! returns its comparison count, so the cost of an operation is part of its
//! result.
//!
//! # Quick Start
//!
//! ```
//! use loadout_inventory::{Backpack, Item, Satchel};
//!
//! let mut pack = Backpack::new();
//! pack.insert(Item::new("Medkit", "cura", 3)).unwrap();
//! pack.insert(Item::new("Rifle", "arma", 1)).unwrap();
//!
//! let removed = pack.remove_by_name("Medkit").unwrap();
//! assert_eq!(removed.quantity(), 3);
//! assert_eq!(pack.len(), 1);
//!
//! let mut satchel = Satchel::new();
//! satchel.insert_tail(removed).unwrap();
//! assert_eq!(satchel.search_linear("Medkit").comparisons, 1);
//! ```
//!
//! # Configuration
//!
//! Capacities default to 10 items and 20 components and can be read from
//! TOML with [`Capacities::from_toml_str`].
//!
//! # Logging
//!
//! Mutations log at `debug`, probes at `trace`, and rejected inserts at
//! `warn` through `tracing`. Install a subscriber to see them.

#![warn(missing_docs)]

pub mod backpack;
pub mod config;
pub mod error;
pub mod record;
pub mod satchel;
pub mod timing;
pub mod tower;

pub use backpack::Backpack;
pub use config::Capacities;
pub use error::{InventoryError, InventoryResult};
pub use record::{Component, Item, Named};
pub use satchel::Satchel;
pub use timing::{LatencyRecorder, LatencySummary, Timed};
pub use tower::{KeyLookup, SortStrategy, Sorted, TimedSort, Tower};
