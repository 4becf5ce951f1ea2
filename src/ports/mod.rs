// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits through which the loader reaches the outside
//! world: fetching raw text, and parsing it. Adapters implement them.

pub mod fetcher;
pub mod parser;

// Re-export commonly used types
pub use fetcher::TextFetcher;
pub use parser::{ConfigEntry, ConfigParser};
