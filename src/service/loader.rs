// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader.
//!
//! This module provides `ConfigLoader`, which fetches configuration text through a
//! [`TextFetcher`], parses it, and writes the entries into a [`ConfigStore`].

use crate::adapters::{KeyValueParser, MalformedLinePolicy};
use crate::domain::{ConfigError, ConfigMapping, ConfigStore, Result};
use crate::ports::{ConfigParser, TextFetcher};
use crate::service::InMemoryConfigStore;
use std::sync::Arc;

#[cfg(feature = "blocking")]
use once_cell::sync::Lazy;

/// Shared runtime for `load_blocking`, created on first use
#[cfg(feature = "blocking")]
static BLOCKING_RUNTIME: Lazy<std::io::Result<tokio::runtime::Runtime>> =
    Lazy::new(tokio::runtime::Runtime::new);

/// Fetches, parses, and stores configuration.
///
/// A load runs in three steps:
///
/// 1. the text is fetched; on failure the load ends with
///    [`ConfigError::LoadError`] ("Could not load the file") and the store is not
///    touched
/// 2. the whole text is parsed before anything is stored
/// 3. entries are written to the store in source order, so the last occurrence of a
///    repeated key wins
///
/// Loads add to the store and never clear it. The loader keeps no other state, so
/// loading the same text twice leaves the store as loading it once did.
///
/// Two loads running at the same time against one store are not ordered against
/// each other; their entries interleave.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::InMemoryFetcher;
/// use kvcfg::domain::ConfigValue;
/// use kvcfg::service::ConfigLoader;
///
/// # fn main() -> kvcfg::domain::Result<()> {
/// let fetcher = InMemoryFetcher::new().with_document("app.cfg", "port = 8080\ndebug = on");
/// let loader = ConfigLoader::new(fetcher);
///
/// tokio_test::block_on(loader.load("app.cfg"))?;
///
/// let config = loader.get_all();
/// assert_eq!(config.get("port"), Some(&ConfigValue::Int(8080)));
/// assert_eq!(config.get("debug"), Some(&ConfigValue::Bool(true)));
/// # Ok(())
/// # }
/// ```
pub struct ConfigLoader<F> {
    /// Where configuration text comes from
    fetcher: F,
    /// Turns text into entries
    parser: Box<dyn ConfigParser>,
    /// Where entries go
    store: Arc<dyn ConfigStore>,
}

impl<F: TextFetcher> ConfigLoader<F> {
    /// Creates a loader with a fresh [`InMemoryConfigStore`] and a lenient
    /// [`KeyValueParser`].
    pub fn new(fetcher: F) -> Self {
        Self::builder(fetcher).build()
    }

    /// Creates a loader builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvcfg::adapters::InMemoryFetcher;
    /// use kvcfg::service::{ConfigLoader, InMemoryConfigStore};
    /// use std::sync::Arc;
    ///
    /// let store = Arc::new(InMemoryConfigStore::new());
    /// let loader = ConfigLoader::builder(InMemoryFetcher::new())
    ///     .with_store(store.clone())
    ///     .strict(true)
    ///     .build();
    /// ```
    pub fn builder(fetcher: F) -> ConfigLoaderBuilder<F> {
        ConfigLoaderBuilder::new(fetcher)
    }

    /// Fetches the text at `path` and applies it to the store.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::LoadError`] - the fetch failed; nothing was applied
    /// * [`ConfigError::MalformedLine`] - only with a strict parser; nothing was applied
    pub async fn load(&self, path: &str) -> Result<()> {
        tracing::debug!(
            "Loading configuration '{}' via {}",
            path,
            self.fetcher.name()
        );

        let content = self.fetcher.fetch(path).await.map_err(|e| {
            tracing::warn!(
                "Failed to fetch configuration '{}' via {}: {}",
                path,
                self.fetcher.name(),
                e
            );
            ConfigError::load_failed(path, Some(Box::new(e)))
        })?;

        self.apply(&content)
    }

    /// Runs [`load`](Self::load) to completion on a shared runtime.
    ///
    /// For callers without an async runtime of their own. Calling this from inside
    /// a tokio runtime panics, as any nested `block_on` does.
    #[cfg(feature = "blocking")]
    pub fn load_blocking(&self, path: &str) -> Result<()> {
        let runtime = BLOCKING_RUNTIME.as_ref().map_err(|e| ConfigError::SourceError {
            source_name: "runtime".to_string(),
            message: format!("Failed to create runtime for blocking load: {}", e),
            source: None,
        })?;
        runtime.block_on(self.load(path))
    }

    /// Parses `content` and applies it to the store, without fetching.
    pub fn load_str(&self, content: &str) -> Result<()> {
        self.apply(content)
    }

    /// Returns an independent copy of everything loaded so far.
    pub fn get_all(&self) -> ConfigMapping {
        self.store.get_all()
    }

    /// Returns the store this loader writes to.
    pub fn store(&self) -> Arc<dyn ConfigStore> {
        Arc::clone(&self.store)
    }

    /// Returns the fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn apply(&self, content: &str) -> Result<()> {
        let entries = self.parser.parse(content)?;
        let count = entries.len();

        for (key, value) in entries {
            tracing::trace!("Setting '{}' = {:?}", key, value);
            self.store.set(key, value);
        }

        tracing::debug!("Applied {} configuration entries", count);
        Ok(())
    }
}

/// Builder for constructing a [`ConfigLoader`].
///
/// Defaults: a new [`InMemoryConfigStore`] and a [`KeyValueParser`] that skips
/// malformed lines.
pub struct ConfigLoaderBuilder<F> {
    fetcher: F,
    parser: Option<Box<dyn ConfigParser>>,
    store: Option<Arc<dyn ConfigStore>>,
    policy: MalformedLinePolicy,
}

impl<F: TextFetcher> ConfigLoaderBuilder<F> {
    /// Creates a new builder around `fetcher`.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            parser: None,
            store: None,
            policy: MalformedLinePolicy::default(),
        }
    }

    /// Writes into `store` instead of a fresh one, e.g. to share it with readers.
    pub fn with_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Parses with `parser` instead of the default [`KeyValueParser`].
    ///
    /// A custom parser ignores [`strict`](Self::strict).
    pub fn with_parser(mut self, parser: impl ConfigParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Rejects text containing malformed lines instead of skipping them.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.policy = if enabled {
            MalformedLinePolicy::Reject
        } else {
            MalformedLinePolicy::Skip
        };
        self
    }

    /// Builds the loader.
    pub fn build(self) -> ConfigLoader<F> {
        let policy = self.policy;
        ConfigLoader {
            fetcher: self.fetcher,
            parser: self
                .parser
                .unwrap_or_else(|| Box::new(KeyValueParser::with_policy(policy))),
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryConfigStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryFetcher;
    use crate::domain::{ConfigKey, ConfigValue};
    use crate::ports::ConfigEntry;

    fn loader_with(path: &str, content: &str) -> ConfigLoader<InMemoryFetcher> {
        ConfigLoader::new(InMemoryFetcher::new().with_document(path, content))
    }

    #[tokio::test]
    async fn test_load_populates_store() {
        let loader = loader_with("app.cfg", "a = 1\nb = two");
        loader.load("app.cfg").await.unwrap();

        let config = loader.get_all();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("a"), Some(&ConfigValue::Int(1)));
        assert_eq!(config.get("b"), Some(&ConfigValue::from("two")));
    }

    #[tokio::test]
    async fn test_load_missing_path() {
        let loader = loader_with("app.cfg", "a = 1");
        let err = loader.load("missing.cfg").await.unwrap_err();

        assert_eq!(err.to_string(), "Could not load the file");
        match err {
            ConfigError::LoadError { path, source } => {
                assert_eq!(path, "missing.cfg");
                assert!(source.is_some());
            }
            other => panic!("expected LoadError, got {:?}", other),
        }
        assert!(loader.get_all().is_empty());
    }

    #[tokio::test]
    async fn test_load_is_additive() {
        let fetcher = InMemoryFetcher::new()
            .with_document("one", "a = 1")
            .with_document("two", "b = 2");
        let loader = ConfigLoader::new(fetcher);

        loader.load("one").await.unwrap();
        loader.load("two").await.unwrap();

        let config = loader.get_all();
        assert_eq!(config.len(), 2);
    }

    #[tokio::test]
    async fn test_strict_load_applies_nothing() {
        let fetcher = InMemoryFetcher::new().with_document("app.cfg", "a = 1\noops\nb = 2");
        let loader = ConfigLoader::builder(fetcher).strict(true).build();

        let err = loader.load("app.cfg").await.unwrap_err();
        assert!(matches!(err, ConfigError::MalformedLine { line_number: 2, .. }));
        assert!(loader.get_all().is_empty());
    }

    #[test]
    fn test_load_str() {
        let loader = ConfigLoader::new(InMemoryFetcher::new());
        loader.load_str("x = 1.5").unwrap();

        assert_eq!(loader.store().get("x"), Some(ConfigValue::Float(1.5)));
    }

    #[test]
    fn test_builder_shared_store() {
        let store = Arc::new(InMemoryConfigStore::new());
        let loader = ConfigLoader::builder(InMemoryFetcher::new())
            .with_store(store.clone())
            .build();

        loader.load_str("shared = yes").unwrap();
        assert_eq!(store.get("shared"), Some(ConfigValue::Bool(true)));
    }

    #[test]
    fn test_builder_custom_parser() {
        struct Upper;
        impl ConfigParser for Upper {
            fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>> {
                Ok(vec![(
                    ConfigKey::new("text")?,
                    ConfigValue::from(content.to_uppercase()),
                )])
            }
        }

        let loader = ConfigLoader::builder(InMemoryFetcher::new())
            .with_parser(Upper)
            .strict(true)
            .build();
        loader.load_str("no separator here").unwrap();

        assert_eq!(
            loader.store().get("text"),
            Some(ConfigValue::from("NO SEPARATOR HERE"))
        );
    }

    #[test]
    fn test_builder_strict_toggle() {
        let loader = ConfigLoader::builder(InMemoryFetcher::new())
            .strict(true)
            .strict(false)
            .build();

        loader.load_str("oops\nok = 1").unwrap();
        assert_eq!(loader.get_all().len(), 1);
    }

    #[test]
    fn test_fetcher_accessor() {
        let loader = ConfigLoader::new(InMemoryFetcher::new());
        assert_eq!(loader.fetcher().name(), "memory");
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_load_blocking() {
        let loader = loader_with("app.cfg", "answer = 42");
        loader.load_blocking("app.cfg").unwrap();

        assert_eq!(loader.store().get("answer"), Some(ConfigValue::Int(42)));
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_load_blocking_failure() {
        let loader = loader_with("app.cfg", "answer = 42");
        let err = loader.load_blocking("nope").unwrap_err();

        assert!(err.is_load_error());
    }
}
