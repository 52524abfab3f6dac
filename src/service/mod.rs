// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer wiring sources to sinks.
//!
//! This module contains the conversion that drives an adapter pair: load the
//! whole configuration from one side, then store it on the other.

pub mod conversion;

// Re-export commonly used types
pub use conversion::Conversion;
