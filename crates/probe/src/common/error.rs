//! Error types for chip enumeration.
//!
//! Two failure shapes exist: the device directory itself cannot be scanned
//! (fatal to a listing), or a single chip cannot be probed (skippable, since
//! a chip may disappear between scan and probe). Missing names, missing
//! labels, and zero discovered chips are data, not errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while enumerating GPIO chips.
#[derive(Debug, Error)]
pub enum Error {
    /// The device directory could not be scanned.
    ///
    /// This is the only failure that aborts a listing; it is reported once,
    /// before any chip line is written.
    #[error("cannot enumerate GPIO chips in {}: {}", .dir.display(), .source)]
    Enumerate {
        /// Directory that was being scanned.
        dir: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// A single chip device could not be opened or queried.
    #[error("cannot read chip information from {}: {}", .path.display(), .source)]
    Chip {
        /// Device node that failed.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },
}
