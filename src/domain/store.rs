// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the contract for the component that
//! owns the parsed configuration. Readers only ever receive copies of what the store
//! holds, so no caller can observe or cause a mutation through a value it was given.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use std::collections::HashMap;

/// The key/value mapping produced by parsing a configuration file.
///
/// A `ConfigMapping` returned from a store is an independent copy; it can be
/// indexed with a plain `&str`.
pub type ConfigMapping = HashMap<ConfigKey, ConfigValue>;

/// A trait for the owner of a [`ConfigMapping`].
///
/// Implementations use interior mutability so that a loader and any number of
/// readers can share one store behind an `Arc`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Every individual call is atomic, but
/// nothing orders the `set` calls of two loads running at the same time: their
/// entries interleave, and for a key written by both, either value may win.
///
/// # Examples
///
/// ```rust
/// use kvcfg::domain::{ConfigKey, ConfigMapping, ConfigStore, ConfigValue};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct MyStore(Mutex<ConfigMapping>);
///
/// impl ConfigStore for MyStore {
///     fn set(&self, key: ConfigKey, value: ConfigValue) {
///         self.0.lock().unwrap().insert(key, value);
///     }
///
///     fn get_all(&self) -> ConfigMapping {
///         self.0.lock().unwrap().clone()
///     }
///
///     fn clear(&self) {
///         self.0.lock().unwrap().clear();
///     }
/// }
///
/// let store = MyStore::default();
/// store.set(ConfigKey::new("port").unwrap(), ConfigValue::Int(8080));
/// assert_eq!(store.get("port"), Some(ConfigValue::Int(8080)));
/// ```
pub trait ConfigStore: Send + Sync {
    /// Inserts or overwrites the entry for `key`.
    fn set(&self, key: ConfigKey, value: ConfigValue);

    /// Returns an independent copy of the whole mapping.
    ///
    /// Later `set` calls are not visible through a copy that was already returned,
    /// and changes made to the copy never reach the store.
    fn get_all(&self) -> ConfigMapping;

    /// Removes every entry.
    ///
    /// Loading never clears the store on its own; this is the explicit reset.
    fn clear(&self);

    /// Returns a copy of the value stored for `key`, if any.
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.get_all().remove(key)
    }

    /// Returns a copy of the value stored for `key`, or `ConfigKeyNotFound`.
    fn require(&self, key: &str) -> Result<ConfigValue> {
        self.get(key).ok_or_else(|| ConfigError::ConfigKeyNotFound {
            key: key.to_string(),
        })
    }

    /// Returns `true` if the store holds an entry for `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    fn len(&self) -> usize {
        self.get_all().len()
    }

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
