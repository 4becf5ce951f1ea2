// SPDX-License-Identifier: MIT OR Apache-2.0

//! A key/value configuration loader with type inference.
//!
//! This crate fetches a plain-text configuration file, parses its `key=value`
//! lines into typed values, and keeps them in a store that only ever hands out
//! copies.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`ConfigKey`, `ConfigValue`, `ConfigLine`,
//!   errors, and the `ConfigStore` contract)
//! - **Ports**: Trait definitions for the outside world (`TextFetcher`, `ConfigParser`)
//! - **Adapters**: The `key=value` parser and the file and in-memory fetchers
//! - **Service**: `InMemoryConfigStore` and the `ConfigLoader` that fills it
//!
//! # File Format
//!
//! ```text
//! # Lines starting with '#' are comments; blank lines are ignored
//! title   = Einstein
//! port    = 8080
//! ratio   = 0.75
//! verbose = on
//! color   = #ff0000
//! ```
//!
//! `#` starts a comment only at the beginning of a line. There is no escaping, and
//! a line is split on its first `=`.
//!
//! Values are typed by the first matching rule: all digits is an integer; digits,
//! a dot, and digits is a float; `true`/`on`/`yes` and `false`/`off`/`no` are
//! booleans; anything else is a string.
//!
//! # Feature Flags
//!
//! - `file`: Enable `FileFetcher` for local files (default)
//! - `blocking`: Enable `ConfigLoader::load_blocking` (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use kvcfg::prelude::*;
//!
//! # fn main() -> kvcfg::domain::Result<()> {
//! let fetcher = InMemoryFetcher::new().with_document("app.cfg", "port = 8080\nname = demo");
//! let loader = ConfigLoader::new(fetcher);
//!
//! tokio_test::block_on(loader.load("app.cfg"))?;
//!
//! let config = loader.get_all();
//! assert_eq!(config["port"].as_i64("port")?, 8080);
//! assert_eq!(config["name"].as_str("name")?, "demo");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{InMemoryFetcher, KeyValueParser, MalformedLinePolicy};
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigMapping, ConfigStore, ConfigValue, Result,
    };
    pub use crate::ports::{ConfigEntry, ConfigParser, TextFetcher};
    pub use crate::service::{ConfigLoader, ConfigLoaderBuilder, InMemoryConfigStore};

    // Re-export adapters based on feature flags
    #[cfg(feature = "file")]
    pub use crate::adapters::FileFetcher;
}
