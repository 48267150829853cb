//! Error types for inventory operations.

use thiserror::Error;

/// Convenience alias for `Result<T, InventoryError>`.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Everything an inventory operation can report.
///
/// All variants are recoverable: the store that returned one is unchanged.
/// A search miss is not an error; it comes back as a
/// [`Probe`](loadout_collections::Probe) with no index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A bounded store is at capacity.
    #[error("{store} is full ({capacity} records), rejected {rejected:?}")]
    Full {
        /// Which store refused the record.
        store: &'static str,
        /// The store's fixed capacity.
        capacity: usize,
        /// Name of the record that was not inserted.
        rejected: String,
    },

    /// No record has the requested name.
    #[error("no record named {name:?}")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A linked node could not be allocated.
    #[error("could not allocate a node for {name:?}")]
    Alloc {
        /// Name of the record that was not inserted.
        name: String,
    },

    /// A record field is wider than its fixed width.
    #[error("{field} is {len} characters, at most {max} allowed")]
    FieldTooLong {
        /// Which field, `"name"` or `"kind"`.
        field: &'static str,
        /// The field's width in characters.
        max: usize,
        /// Characters actually supplied.
        len: usize,
    },

    /// Configuration did not parse or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A latency histogram could not be created.
    #[error("latency histogram: {0}")]
    Histogram(String),
}

impl InventoryError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_owned(),
        }
    }
}
