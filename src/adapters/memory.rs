// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory text fetcher.
//!
//! Serves documents from a table keyed by path. Useful for configuration embedded
//! with `include_str!`, and for tests.

use crate::domain::{ConfigError, Result};
use crate::ports::TextFetcher;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Fetches configuration text from an in-memory table of documents.
///
/// Unknown paths fail like a missing file would.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::InMemoryFetcher;
/// use kvcfg::ports::TextFetcher;
///
/// let fetcher = InMemoryFetcher::new().with_document("app.cfg", "port = 8080");
///
/// let text = tokio_test::block_on(fetcher.fetch("app.cfg")).unwrap();
/// assert_eq!(text, "port = 8080");
/// assert!(tokio_test::block_on(fetcher.fetch("other.cfg")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
    documents: RwLock<HashMap<String, String>>,
}

impl InMemoryFetcher {
    /// Creates a fetcher with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document.
    pub fn with_document(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Creates a fetcher from pre-populated documents.
    pub fn with_documents(documents: HashMap<String, String>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Adds or replaces a document. Later fetches of `path` see the new content.
    pub fn insert(&self, path: impl Into<String>, content: impl Into<String>) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), content.into());
    }

    /// Removes a document. Later fetches of `path` fail.
    pub fn remove(&self, path: &str) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
    }
}

impl TextFetcher for InMemoryFetcher {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ConfigError::source_error("memory", format!("No document at '{}'", path))
            })
    }
}
