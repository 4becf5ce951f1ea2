// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! `ConfigKey` guarantees that every key held by a store is trimmed and
//! non-empty, so callers never have to re-validate keys they read back.

use crate::domain::errors::{ConfigError, Result};
use std::borrow::Borrow;
use std::fmt;

/// A validated configuration key.
///
/// Keys are trimmed of surrounding whitespace on construction; a key that is
/// empty after trimming is rejected.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::new("  server.port ").unwrap();
/// assert_eq!(key.as_str(), "server.port");
///
/// assert!(ConfigKey::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey`, trimming the input.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] if the key is empty after trimming.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidKey { key });
        }
        if trimmed.len() == key.len() {
            Ok(ConfigKey(key))
        } else {
            Ok(ConfigKey(trimmed.to_string()))
        }
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self> {
        ConfigKey::new(s)
    }
}

impl TryFrom<&str> for ConfigKey {
    type Error = ConfigError;

    fn try_from(s: &str) -> Result<Self> {
        ConfigKey::new(s)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a `ConfigMapping` be indexed with a plain `&str`.
impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
