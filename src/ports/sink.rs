// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration sink trait definition.
//!
//! This module defines the `ConfigSink` trait, the counterpart of
//! [`ConfigSource`](crate::ports::ConfigSource): it exports a whole
//! configuration set into one representation.

use crate::domain::{Config, Result};

/// A trait for configuration sinks.
///
/// Storing is single-pass and not transactional. If an error occurs partway
/// through, whatever was already written stays written.
///
/// # Examples
///
/// ```rust
/// use kvtree::ports::ConfigSink;
/// use kvtree::domain::{Config, Result};
///
/// struct CountingSink;
///
/// impl ConfigSink for CountingSink {
///     fn name(&self) -> &str {
///         "counting"
///     }
///
///     fn store(&self, config: &Config) -> Result<()> {
///         println!("{} entries", config.len());
///         Ok(())
///     }
/// }
///
/// CountingSink.store(&Config::new()).unwrap();
/// ```
pub trait ConfigSink {
    /// Returns the name of this sink.
    fn name(&self) -> &str;

    /// Writes every entry of `config` to this sink.
    fn store(&self, config: &Config) -> Result<()>;
}
