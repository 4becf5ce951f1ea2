// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when fetching, parsing, or
//! reading configuration. All errors use `thiserror` for proper error handling and
//! conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::load_failed("assets/config.file", None);
/// assert_eq!(error.to_string(), "Could not load the file");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration text could not be retrieved.
    ///
    /// The message is fixed; the transport failure, if any, is available through
    /// [`std::error::Error::source`].
    #[error("Could not load the file")]
    LoadError {
        /// The path that was requested
        path: String,
        /// The underlying fetch error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A non-comment line did not contain a `key=value` pair.
    #[error("Malformed configuration line {line_number}: '{line}'")]
    MalformedLine {
        /// 1-based line number within the parsed text
        line_number: usize,
        /// The offending line, trimmed
        line: String,
    },

    /// A configuration key was empty after trimming.
    #[error("Invalid configuration key: '{key}'")]
    InvalidKey {
        /// The rejected key text
        key: String,
    },

    /// The requested configuration key was not present.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A value was read as a different type than the one it was inferred as.
    #[error("Configuration value for key '{key}' is {found}, not {expected}")]
    TypeMismatch {
        /// The key being read
        key: String,
        /// The requested type name
        expected: &'static str,
        /// The stored type name
        found: &'static str,
    },

    /// An error occurred in a text fetcher.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the fetcher that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `LoadError` for `path`, wrapping the fetch failure if there is one.
    pub fn load_failed(
        path: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ConfigError::LoadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a `SourceError` without an underlying cause.
    pub fn source_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::SourceError {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Returns `true` if this error came from fetching configuration text.
    pub fn is_load_error(&self) -> bool {
        matches!(self, ConfigError::LoadError { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
