//! Common utilities and types used throughout the enumeration library.
//!
//! This module provides the building blocks shared by the probe and report
//! layers. It includes:
//! 1. **Constants:** Device directory, chip node prefix, and render placeholders.
//! 2. **Error Handling:** The library error enum and its result alias.

/// Constants shared across the library.
pub mod constants;

/// Error types.
pub mod error;

pub use error::{Error, Result};
