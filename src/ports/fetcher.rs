// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text fetcher trait definition.
//!
//! This module defines the `TextFetcher` trait, the port through which the loader
//! retrieves raw configuration text. Local files, embedded documents, or an HTTP
//! client can all sit behind it.

use crate::domain::Result;
use std::future::Future;

/// A trait for retrieving a text resource by path.
///
/// A fetch either yields the whole body as one `String` or fails. Fetch failure is
/// the only way a load can fail before parsing, and the loader reports it as
/// [`ConfigError::LoadError`](crate::domain::ConfigError::LoadError) whatever the
/// underlying error was.
///
/// Timeouts and retries, if any, belong to the implementation.
///
/// # Examples
///
/// ```rust
/// use kvcfg::ports::TextFetcher;
/// use kvcfg::domain::Result;
///
/// struct Embedded;
///
/// impl TextFetcher for Embedded {
///     fn name(&self) -> &str {
///         "embedded"
///     }
///
///     async fn fetch(&self, _path: &str) -> Result<String> {
///         Ok("greeting = hello".to_string())
///     }
/// }
///
/// let text = tokio_test::block_on(Embedded.fetch("anything")).unwrap();
/// assert_eq!(text, "greeting = hello");
/// ```
pub trait TextFetcher: Send + Sync {
    /// Returns a short name for logging and error messages, like `"file"`.
    fn name(&self) -> &str;

    /// Retrieves the full text identified by `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The complete body
    /// * `Err(ConfigError)` - The resource could not be retrieved
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    struct EchoFetcher;

    impl TextFetcher for EchoFetcher {
        fn name(&self) -> &str {
            "echo"
        }

        async fn fetch(&self, path: &str) -> Result<String> {
            Ok(format!("path = {}", path))
        }
    }

    struct BrokenFetcher;

    impl TextFetcher for BrokenFetcher {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self, _path: &str) -> Result<String> {
            Err(ConfigError::source_error(self.name(), "unreachable"))
        }
    }

    #[test]
    fn test_fetcher_name() {
        assert_eq!(EchoFetcher.name(), "echo");
    }

    #[test]
    fn test_fetcher_fetch() {
        let text = tokio_test::block_on(EchoFetcher.fetch("a/b.cfg")).unwrap();
        assert_eq!(text, "path = a/b.cfg");
    }

    #[test]
    fn test_fetcher_failure() {
        let result = tokio_test::block_on(BrokenFetcher.fetch("x"));
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }
}
