// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration set.
//!
//! `Config` is the hand-off point between the JSON export codec and the
//! directory tree mapper. It stores one [`Value`] per [`ConfigKey`] and iterates
//! in ascending key order.

use crate::domain::config_key::ConfigKey;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A flat key-value configuration set.
///
/// Keys are unique; inserting an existing key replaces its value. Iteration is
/// always sorted by key so anything serialized from a `Config` is deterministic.
///
/// # Examples
///
/// ```
/// use kvtree::domain::{Config, Value};
///
/// let mut config = Config::new();
/// config.set("db/port", Value::from("5432"));
/// config.set("db/host", Value::from("localhost\n"));
///
/// assert_eq!(config.get("db/host").unwrap().content(), "localhost");
/// assert_eq!(config.keys().map(|k| k.as_str()).collect::<Vec<_>>(), ["db/host", "db/port"]);
/// assert!(config.get("db/user").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    entries: BTreeMap<ConfigKey, Value>,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites the value stored at `key`.
    ///
    /// Returns the previous value if the key was already present.
    pub fn set(&mut self, key: impl Into<ConfigKey>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Returns the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigKeyNotFound` if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, ConfigKey, Value> {
        self.entries.iter()
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, ConfigKey, Value> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a ConfigKey, &'a Value);
    type IntoIter = btree_map::Iter<'a, ConfigKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<ConfigKey>> FromIterator<(K, Value)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut config = Config::new();
        for (key, value) in iter {
            config.set(key, value);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_is_empty() {
        let config = Config::new();
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::new();
        config.set("a/b", Value::new("x", 3));

        let value = config.get("a/b").unwrap();
        assert_eq!(value.content(), "x");
        assert_eq!(value.flags(), 3);
    }

    #[test]
    fn test_set_overwrites_last_wins() {
        let mut config = Config::new();
        assert!(config.set("key", Value::from("first")).is_none());
        let previous = config.set("key", Value::from("second"));

        assert_eq!(previous.unwrap().content(), "first");
        assert_eq!(config.get("key").unwrap().content(), "second");
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let config = Config::new();
        let err = config.get("missing").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConfigKeyNotFound { ref key } if key == "missing"
        ));
    }

    #[test]
    fn test_empty_key_is_accepted() {
        let mut config = Config::new();
        config.set("", Value::from("root"));
        assert!(config.contains_key(""));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let config: Config = vec![
            ("zeta", Value::from("1")),
            ("alpha/two", Value::from("2")),
            ("alpha", Value::from("3")),
            ("Beta", Value::from("4")),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = config.keys().map(ConfigKey::as_str).collect();
        assert_eq!(keys, vec!["Beta", "alpha", "alpha/two", "zeta"]);
    }

    #[test]
    fn test_new_configs_do_not_share_storage() {
        let mut first = Config::new();
        first.set("only/in/first", Value::from("x"));

        let second = Config::new();
        assert!(second.is_empty());
        assert!(!Config::default().contains_key("only/in/first"));
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let mut config = Config::new();
        config.set("b", Value::from("2"));
        config.set("a", Value::from("1"));

        let contents: Vec<&str> = (&config).into_iter().map(|(_, v)| v.content()).collect();
        assert_eq!(contents, vec!["1", "2"]);
    }
}
