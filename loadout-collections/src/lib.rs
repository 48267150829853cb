//! Small ordered containers and comparison-counted algorithms.
//!
//! This crate provides two sequence representations with the same
//! insert/remove/scan vocabulary, plus quadratic sorts and a binary search
//! that report how much work they did.
//!
//! ```text
//! BoundedArray<T>  - contiguous, fixed capacity, left-compacts on removal
//! Chain<T, S>      - singly linked over slot storage, unbounded
//! ```
//!
//! # Quick Start
//!
//! ```
//! use loadout_collections::{BoundedArray, Chain};
//! use loadout_collections::search::linear_search;
//!
//! let mut arr: BoundedArray<u32> = BoundedArray::with_capacity(10);
//! arr.try_push(7).unwrap();
//! arr.try_push(3).unwrap();
//!
//! let mut chain: Chain<u32> = Chain::new();
//! chain.push_back(7).unwrap();
//! chain.push_back(3).unwrap();
//!
//! // Same lookup, same cost accounting, different layouts.
//! assert_eq!(linear_search(&arr, |&&v| v == 3).comparisons, 2);
//! assert_eq!(linear_search(&chain, |&&v| v == 3).comparisons, 2);
//! ```
//!
//! # Storage
//!
//! A [`Chain`] keeps its nodes in a [`Storage`]: a slot arena with stable
//! indices. Nodes link to their successor by index, and a removed node's
//! slot is handed back in the same call that unlinks it.
//!
//! | Storage | Growth | On allocation failure |
//! |---------|--------|-----------------------|
//! | [`NodePool`] | Growable | Returns [`AllocError`] with the value |
//! | `slab::Slab` | Growable | Aborts (feature `slab`) |
//!
//! # Counting
//!
//! Sorts return their comparison count; searches return a [`Probe`]
//! carrying the index and the count. There is no shared counter: every
//! count belongs to exactly one call.
//!
//! Binary search requires its input to be sorted ascending by the searched
//! key under the same ordering. That precondition is documented, not
//! checked.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod bounded;
pub mod chain;
pub mod index;
pub mod search;
pub mod sort;
pub mod storage;

pub use bounded::BoundedArray;
pub use chain::{Chain, Link};
pub use index::Index;
pub use search::Probe;
pub use storage::{AllocError, Full, NodePool, Storage};
