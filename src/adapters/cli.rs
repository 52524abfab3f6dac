// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface adapter.
//!
//! This module defines the `kvtree` command line. Each subcommand resolves to a
//! fixed [`Conversion`]; there is no name-based dispatch at runtime.
//!
//! ```text
//! kvtree to-folders <FILE> <PATH>
//! kvtree from-folders <PATH> <FILE>
//! ```

use crate::domain::Result;
use crate::service::Conversion;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Map configs between Consul KV export JSON files and a directory structure on disk.
#[derive(Debug, Parser)]
#[command(name = "kvtree", version)]
pub struct Cli {
    /// Conversion to run
    #[command(subcommand)]
    pub command: Command,
}

/// The conversions offered on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Read values from a Consul KV export JSON file and write them out as a folder structure
    ToFolders {
        /// The export JSON file to read values from
        file: PathBuf,
        /// The path to export the values into
        path: PathBuf,
    },
    /// Read a folder structure and emit a Consul KV export JSON file
    FromFolders {
        /// The path to read values from
        path: PathBuf,
        /// The file to create
        file: PathBuf,
    },
}

impl Command {
    /// Returns the conversion this command performs.
    pub fn conversion(&self) -> Conversion {
        match self {
            Command::ToFolders { file, path } => Conversion::json_to_folders(file, path),
            Command::FromFolders { path, file } => Conversion::folders_to_json(path, file),
        }
    }

    /// Runs the command, returning the number of keys converted.
    pub fn run(&self) -> Result<usize> {
        self.conversion().run()
    }
}
