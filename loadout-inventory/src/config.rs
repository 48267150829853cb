//! Store capacities.
//!
//! Capacities can come from a TOML snippet; missing keys keep their
//! defaults.
//!
//! ```toml
//! backpack = 10
//! tower = 20
//! ```

use serde::{Deserialize, Serialize};

use crate::{InventoryError, InventoryResult};

/// Default number of items a backpack holds.
pub const BACKPACK_CAPACITY: usize = 10;

/// Default number of components a tower holds.
pub const TOWER_CAPACITY: usize = 20;

/// Fixed capacities for the bounded stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Capacities {
    /// Items in a [`Backpack`](crate::Backpack).
    pub backpack: usize,
    /// Components in a [`Tower`](crate::Tower).
    pub tower: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            backpack: BACKPACK_CAPACITY,
            tower: TOWER_CAPACITY,
        }
    }
}

impl Capacities {
    /// Parses and validates capacities from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Config`] on malformed TOML, unknown keys or
    /// a zero capacity.
    pub fn from_toml_str(s: &str) -> InventoryResult<Self> {
        let caps: Self = toml::from_str(s).map_err(|e| InventoryError::Config(e.to_string()))?;
        caps.validate()?;
        Ok(caps)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> InventoryResult<String> {
        toml::to_string_pretty(self).map_err(|e| InventoryError::Config(e.to_string()))
    }

    /// Rejects zero capacities.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Config`] naming the offending store.
    pub fn validate(&self) -> InventoryResult<()> {
        if self.backpack == 0 {
            return Err(InventoryError::Config("backpack capacity must be > 0".into()));
        }
        if self.tower == 0 {
            return Err(InventoryError::Config("tower capacity must be > 0".into()));
        }
        Ok(())
    }
}
