// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the store and the loader.
//!
//! `InMemoryConfigStore` owns the parsed configuration; `ConfigLoader` fills it from
//! fetched text.

pub mod loader;
pub mod store;

// Re-export commonly used types
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
pub use store::InMemoryConfigStore;
