// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory tree configuration adapter.
//!
//! This module maps a configuration set onto a directory tree with one file per
//! key. A file at `db/host.yaml` under the root holds the value of key `db/host`:
//! the directory path becomes the key prefix and the file name up to its first
//! `.` becomes the last segment.

use crate::domain::{Config, ConfigError, ConfigKey, Result, Value};
use crate::ports::{ConfigSink, ConfigSource};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Permission bits for directories created on export (rwxr-xr-x).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Returns the part of `file_name` before its first `.`.
///
/// A name without a dot is returned whole.
///
/// # Examples
///
/// ```
/// use kvtree::adapters::folder_tree::file_stem;
///
/// assert_eq!(file_stem("db.yaml"), "db");
/// assert_eq!(file_stem("a.b.c"), "a");
/// assert_eq!(file_stem("Makefile"), "Makefile");
/// ```
pub fn file_stem(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

/// Derives the key for a file from its path relative to the tree root.
///
/// # Errors
///
/// Returns `ConfigError::FormatError` if any path component is not valid UTF-8
/// or the path has no file name.
pub fn key_for_relative_path(relative: &Path) -> Result<ConfigKey> {
    let file_name = relative
        .file_name()
        .ok_or_else(|| ConfigError::format(format!("'{}' has no file name", relative.display())))?;
    let file_name = utf8_component(file_name, relative)?;

    let mut segments = Vec::new();
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            if let Component::Normal(name) = component {
                segments.push(utf8_component(name, relative)?);
            }
        }
    }

    Ok(ConfigKey::from_tree_location(
        &segments.join("/"),
        file_stem(file_name),
    ))
}

fn utf8_component<'a>(name: &'a std::ffi::OsStr, path: &Path) -> Result<&'a str> {
    name.to_str().ok_or_else(|| {
        ConfigError::format(format!("path '{}' is not valid UTF-8", path.display()))
    })
}

/// Creates `dir` and any missing ancestors; existing directories are fine.
fn create_dirs(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

/// Configuration source and sink for a directory tree.
///
/// Loading walks the tree and produces one entry per file, reading through
/// symlinks to files without descending into symlinked directories. Flags cannot
/// be represented on disk, so loaded values always have flags 0. Storing creates
/// parent directories as needed and overwrites existing files.
///
/// Keys are joined onto the root verbatim. A key containing `..` segments or
/// starting with `/` writes outside the root.
///
/// # Examples
///
/// ```rust,no_run
/// use kvtree::adapters::FolderTree;
/// use kvtree::ports::{ConfigSink, ConfigSource};
///
/// let config = FolderTree::new("./config").load().unwrap();
/// FolderTree::new("./mirror").store(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FolderTree {
    /// Root of the directory tree
    root: PathBuf,
}

impl FolderTree {
    /// Creates an adapter for the tree rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check_root(&self) -> Result<()> {
        let metadata = fs::metadata(&self.root).map_err(|e| ConfigError::io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ConfigError::io(
                &self.root,
                io::Error::new(io::ErrorKind::Other, "not a directory"),
            ));
        }
        Ok(())
    }
}

impl ConfigSource for FolderTree {
    fn name(&self) -> &str {
        "folder-tree"
    }

    fn load(&self) -> Result<Config> {
        self.check_root()?;

        let mut config = Config::new();
        for entry in WalkDir::new(&self.root).min_depth(1).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                ConfigError::io(path, io::Error::from(e))
            })?;

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if entry.path_is_symlink() {
                // links to files are read through; linked directories are not descended
                let target =
                    fs::metadata(entry.path()).map_err(|e| ConfigError::io(entry.path(), e))?;
                if !target.is_file() {
                    tracing::debug!("Skipping link to non-file {}", entry.path().display());
                    continue;
                }
            } else if !file_type.is_file() {
                tracing::debug!("Skipping non-regular file {}", entry.path().display());
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).map_err(|_| {
                ConfigError::format(format!(
                    "'{}' is outside of '{}'",
                    entry.path().display(),
                    self.root.display()
                ))
            })?;
            let key = key_for_relative_path(relative)?;
            let content =
                fs::read_to_string(entry.path()).map_err(|e| ConfigError::io(entry.path(), e))?;

            tracing::debug!("Read key '{}' from {}", key, entry.path().display());
            if let Some(previous) = config.set(key.clone(), Value::from_content(content)) {
                tracing::debug!(
                    "Key '{}' already read from another file ({} bytes); replacing",
                    key,
                    previous.content().len()
                );
            }
        }

        Ok(config)
    }
}

impl ConfigSink for FolderTree {
    fn name(&self) -> &str {
        "folder-tree"
    }

    fn store(&self, config: &Config) -> Result<()> {
        for (key, value) in config {
            let path = self.root.join(key.as_relative_path());
            if let Some(parent) = path.parent() {
                create_dirs(parent).map_err(|e| ConfigError::io(parent, e))?;
            }
            fs::write(&path, value.content()).map_err(|e| ConfigError::io(&path, e))?;
            tracing::debug!("Wrote key '{}' to {}", key, path.display());
        }
        Ok(())
    }
}

impl Config {
    /// Reads a directory tree, one entry per file or symlink to a file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IoError` if the tree cannot be walked, a symlink is
    /// dangling, or a file cannot be read as UTF-8 text.
    pub fn from_folders<P: AsRef<Path>>(path: P) -> Result<Config> {
        FolderTree::new(path).load()
    }

    /// Writes each entry to the file named by its key under `path`.
    ///
    /// Stops at the first error; files written before it are left in place.
    pub fn to_folders<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FolderTree::new(path).store(self)
    }
}
