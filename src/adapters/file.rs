// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local file text fetcher.
//!
//! This module provides a fetcher that reads configuration text from the local
//! filesystem using `tokio::fs`.

use crate::domain::{ConfigError, Result};
use crate::ports::TextFetcher;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Fetches configuration text from local files.
///
/// Relative paths are resolved against an optional base directory; absolute paths
/// are used as given. Files must be valid UTF-8 and at most 10MB.
///
/// # Examples
///
/// ```rust,no_run
/// use kvcfg::adapters::FileFetcher;
///
/// // Paths resolved against the working directory
/// let fetcher = FileFetcher::new();
///
/// // Paths resolved against a fixed directory
/// let fetcher = FileFetcher::with_base_dir("/srv/app/assets");
///
/// // Paths resolved against the OS configuration directory for this app
/// let fetcher = FileFetcher::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    /// Directory relative paths are joined onto
    base_dir: Option<PathBuf>,
}

impl FileFetcher {
    /// Creates a fetcher that resolves relative paths against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher that resolves relative paths against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    /// Creates a fetcher rooted at the OS-appropriate configuration directory.
    ///
    /// This uses the `directories` crate, e.g. `~/.config/myapp` on Linux.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::source_error("file", "Failed to determine project directories")
        })?;

        Ok(Self::with_base_dir(proj_dirs.config_dir()))
    }

    /// Returns the base directory, if one is set.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Resolves `path` against the base directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn display_name(path: &Path) -> &str {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }
}

impl TextFetcher for FileFetcher {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        let file_path = self.resolve(path);

        // Check file size before reading
        let metadata = tokio::fs::metadata(&file_path)
            .await
            .map_err(|e| ConfigError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Failed to read file metadata: {}",
                    Self::display_name(&file_path)
                ),
                source: Some(Box::new(e)),
            })?;

        if !metadata.is_file() {
            return Err(ConfigError::source_error(
                "file",
                format!("Not a regular file: {}", Self::display_name(&file_path)),
            ));
        }

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::source_error(
                "file",
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
            ));
        }

        tokio::fs::read_to_string(&file_path)
            .await
            .map_err(|e| ConfigError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Failed to read configuration file: {}",
                    Self::display_name(&file_path)
                ),
                source: Some(Box::new(e)),
            })
    }
}
