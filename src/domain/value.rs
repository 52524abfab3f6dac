// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stored configuration value.
//!
//! This module provides the `Value` type: the text content of one key together
//! with the opaque integer flags carried by the key-value store.

use std::fmt;

/// One stored configuration value.
///
/// The content never ends in whitespace: trailing whitespace, including a
/// trailing newline, is stripped when the value is constructed. `flags` is passed
/// through unchanged and defaults to 0.
///
/// "Whitespace" is Unicode `White_Space` (`str::trim_end`). The ASCII
/// separators U+001C..=U+001F are not in that set and are kept.
///
/// # Examples
///
/// ```
/// use kvtree::domain::value::Value;
///
/// let value = Value::from_content("localhost\n");
/// assert_eq!(value.content(), "localhost");
/// assert_eq!(value.flags(), 0);
///
/// let value = Value::new("x", 3);
/// assert_eq!(value.flags(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Value {
    content: String,
    flags: u64,
}

impl Value {
    /// Creates a new `Value` with the given flags.
    pub fn new(content: impl Into<String>, flags: u64) -> Self {
        let mut content = content.into();
        let trimmed_len = content.trim_end().len();
        content.truncate(trimmed_len);
        Value { content, flags }
    }

    /// Creates a new `Value` with flags set to 0.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self::new(content, 0)
    }

    /// Returns the content as a string slice.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the flags.
    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Returns the content as UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::from_content(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from_content(s)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}
