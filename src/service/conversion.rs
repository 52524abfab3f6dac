// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot conversion between two configuration representations.

use crate::adapters::{ConsulJsonFile, FolderTree};
use crate::domain::Result;
use crate::ports::{ConfigSink, ConfigSource};
use std::path::Path;

/// A conversion from one source into one sink.
///
/// The whole configuration is loaded before anything is stored, so a source
/// that fails to decode never causes a partial write.
///
/// # Examples
///
/// ```rust,no_run
/// use kvtree::service::Conversion;
///
/// let written = Conversion::json_to_folders("export.json", "./config").run().unwrap();
/// println!("wrote {} keys", written);
/// ```
pub struct Conversion {
    source: Box<dyn ConfigSource>,
    sink: Box<dyn ConfigSink>,
}

impl Conversion {
    /// Creates a conversion between arbitrary adapters.
    pub fn new(source: Box<dyn ConfigSource>, sink: Box<dyn ConfigSink>) -> Self {
        Self { source, sink }
    }

    /// Export file to directory tree.
    pub fn json_to_folders<F: AsRef<Path>, D: AsRef<Path>>(file: F, dir: D) -> Self {
        Self::new(
            Box::new(ConsulJsonFile::new(file)),
            Box::new(FolderTree::new(dir)),
        )
    }

    /// Directory tree to export file.
    pub fn folders_to_json<D: AsRef<Path>, F: AsRef<Path>>(dir: D, file: F) -> Self {
        Self::new(
            Box::new(FolderTree::new(dir)),
            Box::new(ConsulJsonFile::new(file)),
        )
    }

    /// Loads from the source and stores into the sink.
    ///
    /// Returns the number of keys converted.
    pub fn run(&self) -> Result<usize> {
        tracing::info!(
            "Converting '{}' -> '{}'",
            self.source.name(),
            self.sink.name()
        );

        let config = self.source.load()?;
        tracing::info!("Loaded {} keys from '{}'", config.len(), self.source.name());

        self.sink.store(&config)?;
        tracing::info!("Stored {} keys into '{}'", config.len(), self.sink.name());

        Ok(config.len())
    }
}

impl std::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversion")
            .field("source", &self.source.name())
            .field("sink", &self.sink.name())
            .finish()
    }
}
