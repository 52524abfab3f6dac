// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the in-memory model shared by every conversion: keys,
//! values, the configuration set and the error type. It performs no I/O.

pub mod config;
pub mod config_key;
pub mod errors;
pub mod value;

// Re-export commonly used types
pub use config::Config;
pub use config_key::ConfigKey;
pub use errors::{ConfigError, Result};
pub use value::Value;
