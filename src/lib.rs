// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convert Consul KV export files to and from a directory tree.
//!
//! `consul kv export` produces a JSON array of `{key, flags, value}` records with
//! base64 encoded values. That is awkward to keep in version control, so this
//! crate maps the same data onto a directory tree with one file per key: key
//! `db/host` lives in `db/host` (or `db/host.yaml`, `db/host.txt`, ...) and the
//! file holds the plain text value. Either side can be converted into the other.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The in-memory model (`Config`, `ConfigKey`, `Value`, errors)
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigSink`, `ConfigParser`)
//! - **Adapters**: The export file, the directory tree and the command line
//! - **Service**: `Conversion`, which loads from one adapter and stores into another
//!
//! # Lossy edges
//!
//! - The tree has nowhere to keep `flags`; values read from a tree have flags 0.
//! - Trailing whitespace is stripped from every value.
//! - File names are cut at their first `.`, so `host.yaml` and `host.json` in the
//!   same directory both map to `host` and only one survives.
//!
//! # Feature Flags
//!
//! - `cli`: The `kvtree` binary and its clap command line (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kvtree::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("export.json")?;
//! config.to_folders("./config")?;
//!
//! let config = Config::from_folders("./config")?;
//! config.to_file("export.json")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{ConsulJsonFile, ConsulJsonParser, FolderTree};
    pub use crate::domain::{Config, ConfigError, ConfigKey, Result, Value};
    pub use crate::ports::{ConfigParser, ConfigSink, ConfigSource};
    pub use crate::service::Conversion;

    #[cfg(feature = "cli")]
    pub use crate::adapters::{Cli, Command};
}
