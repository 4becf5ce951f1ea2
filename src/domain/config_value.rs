// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration values.
//!
//! This module provides the `ConfigValue` type, a tagged scalar holding one of the
//! four value kinds a configuration line can produce, together with the inference
//! rules that turn raw value text into a typed value.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Words that infer to `false`. Matching is case-sensitive.
const FALSE_WORDS: [&str; 3] = ["false", "off", "no"];

/// Words that infer to `true`. Matching is case-sensitive.
const TRUE_WORDS: [&str; 3] = ["true", "on", "yes"];

/// A typed configuration value.
///
/// Values serialize untagged, so a snapshot converts to a plain JSON object such as
/// `{"port": 8080, "debug": true}`.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::config_value::ConfigValue;
///
/// assert_eq!(ConfigValue::infer("42"), ConfigValue::Int(42));
/// assert_eq!(ConfigValue::infer("0.5"), ConfigValue::Float(0.5));
/// assert_eq!(ConfigValue::infer("yes"), ConfigValue::Bool(true));
/// assert_eq!(ConfigValue::infer(".5"), ConfigValue::Str(".5".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An unsigned run of decimal digits, e.g. `8080` or `05`.
    Int(i64),
    /// Digits, one dot, digits, e.g. `0.25`.
    Float(f64),
    /// One of `true`/`on`/`yes` or `false`/`off`/`no`.
    Bool(bool),
    /// Anything else, verbatim.
    Str(String),
}

impl ConfigValue {
    /// Infers a typed value from already-trimmed value text.
    ///
    /// Rules are tried in order and the first match wins:
    ///
    /// 1. `^[0-9]+$` becomes [`ConfigValue::Int`]. A digit run too large for `i64`
    ///    becomes [`ConfigValue::Float`] instead.
    /// 2. `^[0-9]+\.[0-9]+$` becomes [`ConfigValue::Float`]. There is no sign and no
    ///    bare leading dot.
    /// 3. `false`, `off`, `no` become `Bool(false)`.
    /// 4. `true`, `on`, `yes` become `Bool(true)`.
    /// 5. Everything else becomes [`ConfigValue::Str`] holding the text unchanged.
    ///
    /// Numeric text too large for a finite `f64` stays a [`ConfigValue::Str`].
    pub fn infer(text: &str) -> Self {
        if is_digits(text) {
            if let Ok(n) = text.parse::<i64>() {
                return ConfigValue::Int(n);
            }
            if let Some(f) = parse_finite(text) {
                return ConfigValue::Float(f);
            }
        }

        if is_decimal(text) {
            if let Some(f) = parse_finite(text) {
                return ConfigValue::Float(f);
            }
        }

        if FALSE_WORDS.contains(&text) {
            return ConfigValue::Bool(false);
        }
        if TRUE_WORDS.contains(&text) {
            return ConfigValue::Bool(true);
        }

        ConfigValue::Str(text.to_string())
    }

    /// Returns a short human-readable name for the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Str(_) => "string",
        }
    }

    fn mismatch(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
            found: self.type_name(),
        }
    }

    /// Returns the integer, or a `TypeMismatch` naming `key`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Int(n) => Ok(*n),
            _ => Err(self.mismatch(key, "integer")),
        }
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers are widened, so `timeout=5` can be read as `5.0`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Int(n) => Ok(*n as f64),
            _ => Err(self.mismatch(key, "float")),
        }
    }

    /// Returns the boolean, or a `TypeMismatch` naming `key`.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(key, "boolean")),
        }
    }

    /// Returns the string, or a `TypeMismatch` naming `key`.
    ///
    /// Only [`ConfigValue::Str`] values are returned; use `to_string()` to render any
    /// variant as text.
    pub fn as_str(&self, key: &str) -> Result<&str> {
        match self {
            ConfigValue::Str(s) => Ok(s),
            _ => Err(self.mismatch(key, "string")),
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn is_decimal(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => false,
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Int(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Int(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Str(s) => write!(f, "{}", s),
        }
    }
}
