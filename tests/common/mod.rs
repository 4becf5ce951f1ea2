// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use kvcfg::domain::{ConfigError, Result};
use kvcfg::ports::TextFetcher;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness so it shows up for failing tests.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Writes `content` to a temporary file that is deleted when dropped.
#[allow(dead_code)]
pub fn create_temp_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// A fetcher that always fails, counting how often it was asked.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingFetcher {
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FailingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextFetcher for FailingFetcher {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ConfigError::source_error(
            "failing",
            format!("connection refused while fetching '{}'", path),
        ))
    }
}
