//! GPIO chip enumeration library.
//!
//! Discovers the GPIO controller chips a Linux system exposes through the
//! character-device interface (`/dev/gpiochip*`) and reports each chip's
//! name, label, and line count. This crate provides:
//! 1. **Common:** Shared constants and the library error type.
//! 2. **Probe:** Device-directory scan, per-chip ioctl probe, and a lazy chip iterator.
//! 3. **Report:** The text listing written by the `gpiolist` binary.

/// Common constants and error types.
pub mod common;
/// Chip discovery and probing.
pub mod probe;
/// Listing output.
pub mod report;

/// Library error type; `Enumerate` is fatal to a listing, `Chip` is skippable.
pub use crate::common::error::Error;
/// Result alias over [`Error`].
pub use crate::common::error::Result;
/// Chip descriptor; its `Display` form is one listing line.
pub use crate::probe::ChipInfo;
/// Lazy iterator over discovered chips; construct with [`Chips::enumerate`].
pub use crate::probe::Chips;
