// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which converts between the text
//! of a serialized configuration set and the in-memory [`Config`].

use crate::domain::{Config, Result};

/// A trait for parsing and rendering serialized configuration sets.
///
/// Implementations keep I/O out of the format handling so the same parser can be
/// used on files, strings read from stdin, or test fixtures.
///
/// # Examples
///
/// ```rust
/// use kvtree::ports::ConfigParser;
/// use kvtree::domain::{Config, Result, Value};
///
/// /// One `key=value` pair per line.
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<Config> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k, Value::from(v)))
///             .collect())
///     }
///
///     fn render(&self, config: &Config) -> Result<String> {
///         Ok(config
///             .iter()
///             .map(|(k, v)| format!("{}={}\n", k, v))
///             .collect())
///     }
/// }
///
/// let config = LineParser.parse("a=1\nb=2\n").unwrap();
/// assert_eq!(LineParser.render(&config).unwrap(), "a=1\nb=2\n");
/// ```
pub trait ConfigParser {
    /// Parses serialized content into a configuration set.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw text of the serialized configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - The decoded configuration
    /// * `Err(ConfigError)` - The content is malformed
    fn parse(&self, content: &str) -> Result<Config>;

    /// Renders a configuration set into serialized text.
    ///
    /// Rendering the same configuration twice must produce identical text.
    fn render(&self, config: &Config) -> Result<String>;
}
