// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the concrete representations.
//!
//! This module contains implementations of the traits defined in the ports
//! layer: the Consul export file, the directory tree, and the command line that
//! connects them.

#[cfg(feature = "cli")]
pub mod cli;
pub mod consul_json;
pub mod folder_tree;
pub(crate) mod indent;

// Re-export adapters
#[cfg(feature = "cli")]
pub use cli::{Cli, Command};
pub use consul_json::{ConsulJsonFile, ConsulJsonParser};
pub use folder_tree::FolderTree;
