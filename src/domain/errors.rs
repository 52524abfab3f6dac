// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the conversion crate.
//!
//! This module defines the error types that can occur when decoding, encoding,
//! reading or writing a configuration set. All errors use `thiserror` for proper
//! error handling and conversion.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for conversion operations.
///
/// Every variant aborts the conversion that produced it; nothing is retried or
/// recovered internally. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use kvtree::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "db/host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key is not present in the configuration.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The input is not in the expected format.
    ///
    /// Covers malformed JSON, missing record fields, invalid base64 and values
    /// that do not decode to UTF-8 text.
    #[error("Invalid format: {message}")]
    FormatError {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A filesystem operation failed.
    #[error("I/O error on '{}': {}", .path.display(), .source)]
    IoError {
        /// The path being read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates an `IoError` for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ConfigError::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a `FormatError` with no underlying cause.
    pub fn format(message: impl Into<String>) -> Self {
        ConfigError::FormatError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `FormatError` from a JSON (de)serialization failure.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        ConfigError::FormatError {
            message: format!("invalid export JSON: {}", err),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `FormatError` for a value of `key` that is not valid base64.
    pub fn from_base64_error(key: &str, err: base64::DecodeError) -> Self {
        ConfigError::FormatError {
            message: format!("value for key '{}' is not valid base64: {}", key, err),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `FormatError` for a value of `key` that does not decode to UTF-8.
    pub fn from_utf8_error(key: &str, err: std::string::FromUtf8Error) -> Self {
        ConfigError::FormatError {
            message: format!("value for key '{}' is not valid UTF-8: {}", key, err),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use std::error::Error as _;

    #[test]
    fn test_config_key_not_found_error() {
        let error = ConfigError::ConfigKeyNotFound {
            key: "db/host".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: db/host");
    }

    #[test]
    fn test_format_error_without_source() {
        let error = ConfigError::format("missing field");
        assert_eq!(error.to_string(), "Invalid format: missing field");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_io_error_includes_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::io("/tmp/export.json", io_error);
        assert!(matches!(error, ConfigError::IoError { .. }));
        assert!(error.to_string().contains("/tmp/export.json"));
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let error = ConfigError::from_json_error(json_err);
        assert!(matches!(error, ConfigError::FormatError { .. }));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_from_base64_error() {
        let b64_err = STANDARD.decode("!!!").unwrap_err();
        let error = ConfigError::from_base64_error("a/b", b64_err);
        assert!(error.to_string().contains("a/b"));
        assert!(error.to_string().contains("base64"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error = ConfigError::from_utf8_error("a/b", utf8_err);
        assert!(error.to_string().contains("UTF-8"));
    }
}
