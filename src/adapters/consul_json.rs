// SPDX-License-Identifier: MIT OR Apache-2.0

//! Consul KV export JSON adapter.
//!
//! This module reads and writes the JSON array produced by `consul kv export`:
//!
//! ```text
//! [
//! 	{
//! 		"key": "db/host",
//! 		"flags": 0,
//! 		"value": "bG9jYWxob3N0"
//! 	}
//! ]
//! ```
//!
//! Values are base64 encoded UTF-8 text. Output is sorted by key and indented
//! with tabs, matching what Consul itself emits.

use crate::adapters::indent::leading_spaces_to_tabs;
use crate::domain::{Config, ConfigError, Result, Value};
use crate::ports::{ConfigParser, ConfigSink, ConfigSource};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Number of spaces per indentation level before tab conversion.
const INDENT_WIDTH: usize = 4;

/// One element of the export array.
///
/// Field declaration order is the serialized order.
#[derive(Debug, Serialize, Deserialize)]
struct ExportRecord {
    key: String,
    flags: u64,
    value: String,
}

/// Parser for the Consul KV export format.
///
/// # Examples
///
/// ```rust
/// use kvtree::adapters::ConsulJsonParser;
/// use kvtree::ports::ConfigParser;
///
/// let parser = ConsulJsonParser::new();
/// let config = parser
///     .parse(r#"[{"key": "db/host", "flags": 0, "value": "bG9jYWxob3N0"}]"#)
///     .unwrap();
/// assert_eq!(config.get("db/host").unwrap().content(), "localhost");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsulJsonParser;

impl ConsulJsonParser {
    /// Creates a new Consul export parser.
    pub fn new() -> Self {
        ConsulJsonParser
    }

    /// Decodes canonical padded base64; non-zero trailing bits are rejected.
    fn decode_value(key: &str, encoded: &str) -> Result<String> {
        // pretty-printed exports may carry trailing whitespace inside the string
        let bytes = STANDARD
            .decode(encoded.trim_end())
            .map_err(|e| ConfigError::from_base64_error(key, e))?;
        String::from_utf8(bytes).map_err(|e| ConfigError::from_utf8_error(key, e))
    }
}

impl ConfigParser for ConsulJsonParser {
    fn parse(&self, content: &str) -> Result<Config> {
        let records: Vec<ExportRecord> =
            serde_json::from_str(content).map_err(ConfigError::from_json_error)?;

        let mut config = Config::new();
        for record in records {
            let text = Self::decode_value(&record.key, &record.value)?;
            tracing::debug!(
                "Decoded key '{}' ({} bytes, flags={})",
                record.key,
                text.len(),
                record.flags
            );
            if config.set(record.key.as_str(), Value::new(text, record.flags)).is_some() {
                tracing::debug!("Duplicate key '{}' in export; keeping last", record.key);
            }
        }

        Ok(config)
    }

    fn render(&self, config: &Config) -> Result<String> {
        let records: Vec<ExportRecord> = config
            .iter()
            .map(|(key, value)| ExportRecord {
                key: key.as_str().to_string(),
                flags: value.flags(),
                value: STANDARD.encode(value.as_bytes()),
            })
            .collect();

        let indent = " ".repeat(INDENT_WIDTH);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(ConfigError::from_json_error)?;

        let pretty = String::from_utf8(buf)
            .map_err(|e| ConfigError::format(format!("serializer produced invalid UTF-8: {}", e)))?;

        Ok(leading_spaces_to_tabs(&pretty, INDENT_WIDTH))
    }
}

/// Configuration source and sink for a Consul export file on disk.
///
/// Loading reads and decodes the whole file. Storing renders the configuration
/// and replaces the file's contents.
///
/// # Examples
///
/// ```rust,no_run
/// use kvtree::adapters::ConsulJsonFile;
/// use kvtree::ports::{ConfigSink, ConfigSource};
///
/// let config = ConsulJsonFile::new("export.json").load().unwrap();
/// ConsulJsonFile::new("copy.json").store(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConsulJsonFile {
    /// Path to the export file
    path: PathBuf,
    /// Export format parser
    parser: ConsulJsonParser,
}

impl ConsulJsonFile {
    /// Creates an adapter for the export file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            parser: ConsulJsonParser::new(),
        }
    }

    /// Returns the path to the export file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for ConsulJsonFile {
    fn name(&self) -> &str {
        "consul-json"
    }

    fn load(&self) -> Result<Config> {
        let bytes = fs::read(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| ConfigError::FormatError {
            message: format!("{} is not valid UTF-8", self.path.display()),
            source: Some(Box::new(e)),
        })?;

        let config = self.parser.parse(&content)?;
        tracing::debug!(
            "Read {} keys from {}",
            config.len(),
            self.path.display()
        );
        Ok(config)
    }
}

impl ConfigSink for ConsulJsonFile {
    fn name(&self) -> &str {
        "consul-json"
    }

    fn store(&self, config: &Config) -> Result<()> {
        let rendered = self.parser.render(config)?;
        fs::write(&self.path, rendered).map_err(|e| ConfigError::io(&self.path, e))?;
        tracing::debug!(
            "Wrote {} keys to {}",
            config.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl Config {
    /// Reads a Consul KV export file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IoError` if the file cannot be read and
    /// `ConfigError::FormatError` if it is not a valid export.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        ConsulJsonFile::new(path).load()
    }

    /// Writes this configuration as a Consul KV export file, replacing any
    /// existing file at `path`.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        ConsulJsonFile::new(path).store(self)
    }
}
