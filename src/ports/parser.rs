// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns raw configuration text
//! into typed entries.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// One parsed entry, in the order it appeared in the source text.
pub type ConfigEntry = (ConfigKey, ConfigValue);

/// A trait for parsing configuration text.
///
/// Entries are returned in source order, duplicates included. Applying them to a
/// store one after another therefore gives last-write-wins semantics for repeated
/// keys.
///
/// # Examples
///
/// ```rust
/// use kvcfg::ports::{ConfigEntry, ConfigParser};
/// use kvcfg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct OneKeyParser;
///
/// impl ConfigParser for OneKeyParser {
///     fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>> {
///         Ok(vec![(ConfigKey::new("raw")?, ConfigValue::from(content))])
///     }
/// }
///
/// let entries = OneKeyParser.parse("text").unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration text into typed entries.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConfigEntry>)` - The entries in source order
    /// * `Err(ConfigError)` - The text was rejected; nothing should be applied
    fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Splits on whitespace and treats every word as a flag
    struct FlagParser;

    impl ConfigParser for FlagParser {
        fn parse(&self, content: &str) -> Result<Vec<ConfigEntry>> {
            content
                .split_whitespace()
                .map(|word| Ok((ConfigKey::new(word)?, ConfigValue::Bool(true))))
                .collect()
        }
    }

    #[test]
    fn test_parser_parse() {
        let entries = FlagParser.parse("verbose color").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.as_str(), "verbose");
        assert_eq!(entries[1].1, ConfigValue::Bool(true));
    }

    #[test]
    fn test_parser_parse_empty_content() {
        let entries = FlagParser.parse("").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parser_is_object_safe() {
        let parser: Box<dyn ConfigParser> = Box::new(FlagParser);
        assert_eq!(parser.parse("x").unwrap().len(), 1);
    }
}
