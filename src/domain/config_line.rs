// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single line of configuration text.

/// A `key=value` pair split out of one line, both sides trimmed.
///
/// The line is split on the first `=`, so the value may itself contain `=`.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::ConfigLine;
///
/// let line = ConfigLine::split(" url = http://host/?a=b ").unwrap();
/// assert_eq!(line.key, "url");
/// assert_eq!(line.value, "http://host/?a=b");
///
/// assert!(ConfigLine::split("no separator").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigLine<'a> {
    /// Text left of the first `=`, trimmed.
    pub key: &'a str,
    /// Text right of the first `=`, trimmed.
    pub value: &'a str,
}

impl<'a> ConfigLine<'a> {
    /// Splits `line` on its first `=`. Returns `None` if there is no `=`.
    pub fn split(line: &'a str) -> Option<Self> {
        let (key, value) = line.split_once('=')?;
        Some(ConfigLine {
            key: key.trim(),
            value: value.trim(),
        })
    }

    /// Returns `true` for lines that carry no entry: blank after trimming, or
    /// starting with `#` after trimming.
    pub fn is_ignorable(line: &str) -> bool {
        let line = line.trim_start();
        line.is_empty() || line.starts_with('#')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_both_sides() {
        let line = ConfigLine::split("  key\t=  value  ").unwrap();
        assert_eq!(line.key, "key");
        assert_eq!(line.value, "value");
    }

    #[test]
    fn test_split_on_first_separator() {
        let line = ConfigLine::split("a=b=c").unwrap();
        assert_eq!(line.key, "a");
        assert_eq!(line.value, "b=c");
    }

    #[test]
    fn test_split_empty_sides() {
        let line = ConfigLine::split("=").unwrap();
        assert_eq!(line.key, "");
        assert_eq!(line.value, "");

        let line = ConfigLine::split("key=").unwrap();
        assert_eq!(line.value, "");
    }

    #[test]
    fn test_split_without_separator() {
        assert!(ConfigLine::split("just text").is_none());
        assert!(ConfigLine::split("").is_none());
    }

    #[test]
    fn test_is_ignorable() {
        assert!(ConfigLine::is_ignorable(""));
        assert!(ConfigLine::is_ignorable("   \t"));
        assert!(ConfigLine::is_ignorable("# comment"));
        assert!(ConfigLine::is_ignorable("   # indented = comment"));
        assert!(!ConfigLine::is_ignorable("key=value # not a comment"));
        assert!(!ConfigLine::is_ignorable("text"));
    }
}
