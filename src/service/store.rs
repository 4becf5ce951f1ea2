// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration store.

use crate::domain::{ConfigKey, ConfigMapping, ConfigStore, ConfigValue};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The default [`ConfigStore`]: a mapping behind a `RwLock`.
///
/// Every accessor returns owned copies, never a reference into the lock.
///
/// # Examples
///
/// ```rust
/// use kvcfg::domain::{ConfigKey, ConfigStore, ConfigValue};
/// use kvcfg::service::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::new();
/// store.set(ConfigKey::new("debug").unwrap(), ConfigValue::Bool(true));
///
/// let mut snapshot = store.get_all();
/// snapshot.clear();
///
/// // The store is unaffected by changes to the snapshot
/// assert_eq!(store.get("debug"), Some(ConfigValue::Bool(true)));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    values: RwLock<ConfigMapping>,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `values`.
    pub fn with_values(values: ConfigMapping) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }

    // Poisoning is ignored: every write is a single insert or clear.
    fn read(&self) -> RwLockReadGuard<'_, ConfigMapping> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigMapping> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn set(&self, key: ConfigKey, value: ConfigValue) {
        self.write().insert(key, value);
    }

    fn get_all(&self) -> ConfigMapping {
        self.read().clone()
    }

    fn clear(&self) {
        self.write().clear();
    }

    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.read().get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
