// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and rules.
//!
//! This module contains the configuration key and value types, the value inference
//! rules, the line model, the error type, and the contract of the configuration
//! store. It is independent of how configuration text is fetched.

pub mod config_key;
pub mod config_line;
pub mod config_value;
pub mod errors;
pub mod store;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_line::ConfigLine;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use store::{ConfigMapping, ConfigStore};
