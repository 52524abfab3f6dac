// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String` for
//! hierarchical keys that use `/` as their separator (`db/host`, `app/feature/flag`).

use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

/// The separator between the segments of a hierarchical key.
pub const KEY_SEPARATOR: char = '/';

/// A type-safe wrapper for configuration keys.
///
/// `ConfigKey` wraps a `String` so keys cannot be confused with values or paths.
/// Keys order lexicographically by their string form, which is the order used
/// whenever a configuration is serialized.
///
/// No format is enforced: an empty key is representable, and segments such as
/// `..` are kept verbatim.
///
/// # Examples
///
/// ```
/// use kvtree::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("db/host");
/// assert_eq!(key.as_str(), "db/host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["db", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("app/name".to_string());
    /// assert_eq!(key.as_str(), "app/name");
    /// ```
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds the key for a file found in a directory tree.
    ///
    /// `directory` is the file's containing directory relative to the tree root,
    /// already joined with `/`; `stem` is the file name up to its first `.`.
    /// A file at the root has an empty `directory` and its key is the bare stem.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from_tree_location("db", "host").as_str(), "db/host");
    /// assert_eq!(ConfigKey::from_tree_location("", "host").as_str(), "host");
    /// ```
    pub fn from_tree_location(directory: &str, stem: &str) -> Self {
        let joined = format!("{}{}{}", directory, KEY_SEPARATOR, stem);
        match joined.strip_prefix(KEY_SEPARATOR) {
            Some(trimmed) => ConfigKey(trimmed.to_string()),
            None => ConfigKey(joined),
        }
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the `/`-separated segments of the key.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_SEPARATOR)
    }

    /// Returns the key as a path relative to a tree root.
    ///
    /// The key is passed through unchanged; it is not sanitized.
    pub fn as_relative_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("db/host".to_string());
        assert_eq!(key.as_str(), "db/host");
    }

    #[test]
    fn test_config_key_from_str() {
        let key = ConfigKey::from("db/host");
        assert_eq!(key.as_str(), "db/host");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("db/host");
        assert_eq!(key.into_string(), "db/host");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("db/host");
        assert_eq!(format!("{}", key), "db/host");
    }

    #[test]
    fn test_config_key_ordering_is_lexicographic() {
        let keys: BTreeSet<ConfigKey> = ["b", "a/z", "a", "A", "a/b"]
            .into_iter()
            .map(ConfigKey::from)
            .collect();
        let ordered: Vec<&str> = keys.iter().map(ConfigKey::as_str).collect();
        assert_eq!(ordered, vec!["A", "a", "a/b", "a/z", "b"]);
    }

    #[test]
    fn test_segments() {
        let key = ConfigKey::from("app/feature/flag");
        assert_eq!(
            key.segments().collect::<Vec<_>>(),
            vec!["app", "feature", "flag"]
        );
    }

    #[test]
    fn test_from_tree_location_nested() {
        let key = ConfigKey::from_tree_location("a/b", "c");
        assert_eq!(key.as_str(), "a/b/c");
    }

    #[test]
    fn test_from_tree_location_at_root() {
        let key = ConfigKey::from_tree_location("", "Makefile");
        assert_eq!(key.as_str(), "Makefile");
    }

    #[test]
    fn test_from_tree_location_empty_stem() {
        assert_eq!(ConfigKey::from_tree_location("dir", "").as_str(), "dir/");
        assert_eq!(ConfigKey::from_tree_location("", "").as_str(), "");
    }

    #[test]
    fn test_relative_path_keeps_traversal_segments() {
        let key = ConfigKey::from("../outside");
        assert_eq!(key.as_relative_path(), Path::new("../outside"));
    }

    #[test]
    fn test_config_key_empty() {
        let key = ConfigKey::from("");
        assert_eq!(key.as_str(), "");
    }
}
