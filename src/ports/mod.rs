// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module defines the interfaces between the domain and the outside world:
//! where configuration sets are read from, where they are written to, and how
//! they are serialized.

pub mod parser;
pub mod sink;
pub mod source;

// Re-export commonly used traits
pub use parser::ConfigParser;
pub use sink::ConfigSink;
pub use source::ConfigSource;
