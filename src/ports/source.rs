// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which a whole
//! configuration set is imported from one representation (an export file, a
//! directory tree, ...).

use crate::domain::{Config, Result};

/// A trait for configuration sources.
///
/// A source produces a complete [`Config`] in a single pass. It either returns
/// the full set or fails with the first error it hits; partial results are never
/// returned.
///
/// # Examples
///
/// ```rust
/// use kvtree::ports::ConfigSource;
/// use kvtree::domain::{Config, Result, Value};
///
/// struct FixedSource;
///
/// impl ConfigSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn load(&self) -> Result<Config> {
///         let mut config = Config::new();
///         config.set("app/name", Value::from("demo"));
///         Ok(config)
///     }
/// }
///
/// let config = FixedSource.load().unwrap();
/// assert_eq!(config.len(), 1);
/// ```
pub trait ConfigSource {
    /// Returns the name of this source.
    ///
    /// Used in log lines; a short identifier like "consul-json" or "folder-tree".
    fn name(&self) -> &str;

    /// Reads the whole configuration set from this source.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Every entry the source holds
    /// * `Err(ConfigError)` - The first format or I/O error encountered
    fn load(&self) -> Result<Config>;
}
