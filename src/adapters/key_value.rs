// SPDX-License-Identifier: MIT OR Apache-2.0

//! `key=value` text parser.
//!
//! This module provides the parser for the line-oriented configuration format:
//!
//! ```text
//! # comment
//! name    = demo
//! port    = 8080
//! ratio   = 0.75
//! verbose = on
//! ```

use crate::domain::{ConfigError, ConfigKey, ConfigLine, ConfigValue, Result};
use crate::ports::{ConfigEntry, ConfigParser};

/// What to do with a line that is neither blank, a comment, nor `key=value`.
///
/// A line is malformed when it has no `=`, or when its key is empty after trimming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Drop the line and log a warning.
    #[default]
    Skip,
    /// Fail the whole parse with [`ConfigError::MalformedLine`].
    Reject,
}

/// Parser for newline-delimited `key=value` text.
///
/// Each line is trimmed, then classified:
///
/// 1. blank or starting with `#`: ignored
/// 2. no `=`, or an empty key: malformed, handled per [`MalformedLinePolicy`]
/// 3. otherwise the value text is typed with [`ConfigValue::infer`]
///
/// There is no escaping; `#` after a value is part of the value.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::KeyValueParser;
/// use kvcfg::domain::ConfigValue;
/// use kvcfg::ports::ConfigParser;
///
/// let parser = KeyValueParser::new();
/// let entries = parser.parse("# settings\nport = 8080\nname = demo").unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].0.as_str(), "port");
/// assert_eq!(entries[0].1, ConfigValue::Int(8080));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyValueParser {
    policy: MalformedLinePolicy,
}

impl KeyValueParser {
    /// Creates a parser that skips malformed lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that rejects text containing a malformed line.
    pub fn strict() -> Self {
        Self::with_policy(MalformedLinePolicy::Reject)
    }

    /// Creates a parser with the given malformed-line policy.
    pub fn with_policy(policy: MalformedLinePolicy) -> Self {
        Self { policy }
    }

    /// Returns the malformed-line policy.
    pub fn policy(&self) -> MalformedLinePolicy {
        self.policy
    }

    fn parse_line(line: &str) -> ParsedLine {
        if ConfigLine::is_ignorable(line) {
            return ParsedLine::Ignored;
        }

        let Some(pair) = ConfigLine::split(line) else {
            return ParsedLine::Malformed;
        };
        match ConfigKey::new(pair.key) {
            Ok(key) => ParsedLine::Entry((key, ConfigValue::infer(pair.value))),
            Err(_) => ParsedLine::Malformed,
        }
    }
}

/// Classification of one trimmed line.
enum ParsedLine {
    Ignored,
    Entry(ConfigEntry),
    Malformed,
}

impl ConfigParser for KeyValueParser {
    fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>> {
        let mut entries = Vec::new();
        // A leading byte-order mark is not part of the first key
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // `split` always yields the final segment, with or without a trailing newline
        for (index, raw) in content.split('\n').enumerate() {
            let line = raw.trim();
            match Self::parse_line(line) {
                ParsedLine::Entry(entry) => entries.push(entry),
                ParsedLine::Ignored => {}
                ParsedLine::Malformed => match self.policy {
                    MalformedLinePolicy::Skip => {
                        tracing::warn!(
                            "Skipping malformed configuration line {}: '{}'",
                            index + 1,
                            line
                        );
                    }
                    MalformedLinePolicy::Reject => {
                        return Err(ConfigError::MalformedLine {
                            line_number: index + 1,
                            line: line.to_string(),
                        });
                    }
                },
            }
        }

        tracing::debug!("Parsed {} configuration entries", entries.len());
        Ok(entries)
    }
}
