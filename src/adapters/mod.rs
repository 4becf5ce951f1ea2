// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the `key=value` parser and the text fetchers that
//! implement the traits defined in the ports layer.

#[cfg(feature = "file")]
pub mod file;
pub mod key_value;
pub mod memory;

// Re-export adapters based on feature flags
#[cfg(feature = "file")]
pub use file::FileFetcher;
pub use key_value::{KeyValueParser, MalformedLinePolicy};
pub use memory::InMemoryFetcher;
