//! GPIO chip discovery and probing.
//!
//! Walks the device directory for `gpiochip<N>` nodes and queries each one
//! through the character-device chip-info ioctl. This module provides:
//! 1. **Descriptor:** [`ChipInfo`] carrying name, label, and line count.
//! 2. **Scan:** [`chip_paths`] collecting candidate device nodes in index order.
//! 3. **Probe:** [`chip_info`] reading one chip's metadata through a scoped descriptor.
//! 4. **Iteration:** [`Chips`], a lazy one-pass iterator over discovered chips.

mod uapi;

use std::fmt;
use std::fs::{self, File};
use std::io;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::common::constants::{CHIP_PREFIX, DEV_DIR, MISSING_FIELD};
use crate::common::error::{Error, Result};

/// Metadata for one GPIO controller chip.
///
/// Produced transiently while iterating [`Chips`]; callers may keep, clone,
/// or serialize descriptors, but nothing in this crate retains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipInfo {
    /// Kernel name of the chip (e.g. `gpiochip0`), if reported.
    pub name: Option<String>,
    /// Human-readable label describing the controller, if reported.
    pub label: Option<String>,
    /// Number of GPIO lines the chip exposes.
    pub num_lines: u32,
}

impl fmt::Display for ChipInfo {
    /// Renders one listing line: `chip: <name|?>, label: <label|?>, lines: <count>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chip: {}, label: {}, lines: {}",
            self.name.as_deref().unwrap_or(MISSING_FIELD),
            self.label.as_deref().unwrap_or(MISSING_FIELD),
            self.num_lines
        )
    }
}

/// Collects candidate GPIO device paths under `dir`, sorted by chip index.
///
/// Only entries named `gpiochip<N>` with a decimal `<N>` qualify; names that
/// merely share the prefix (`gpiochip0.bak`) are skipped. Sorting is numeric,
/// so `gpiochip2` precedes `gpiochip10`.
///
/// # Errors
///
/// Returns [`Error::Enumerate`] when `dir` cannot be read.
pub fn chip_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Enumerate {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut chips: Vec<(u32, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Enumerate {
            dir: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(rest) = name.strip_prefix(CHIP_PREFIX) else {
            continue;
        };
        let Ok(index) = rest.parse::<u32>() else {
            continue;
        };
        chips.push((index, entry.path()));
    }

    chips.sort_unstable_by_key(|&(index, _)| index);
    Ok(chips.into_iter().map(|(_, path)| path).collect())
}

/// Reads one chip's metadata from its device node.
///
/// The descriptor is open only for the duration of this call and is released
/// on every path, including failures.
///
/// # Errors
///
/// Returns [`Error::Chip`] when the node cannot be opened or the chip-info
/// ioctl is rejected.
pub fn chip_info(path: &Path) -> Result<ChipInfo> {
    let device = File::open(path).map_err(|source| Error::Chip {
        path: path.to_path_buf(),
        source,
    })?;

    let mut raw = uapi::GpioChipInfo::zeroed();
    // SAFETY: `device` keeps the descriptor open for the duration of the call
    // and `raw` matches the kernel's `gpiochip_info` layout and size.
    let rc = unsafe {
        libc::ioctl(
            device.as_raw_fd(),
            uapi::GPIO_GET_CHIPINFO_IOCTL,
            &mut raw,
        )
    };
    if rc < 0 {
        return Err(Error::Chip {
            path: path.to_path_buf(),
            source: io::Error::last_os_error(),
        });
    }

    debug!(path = %path.display(), lines = raw.lines, "probed chip");
    Ok(ChipInfo {
        name: uapi::cstr_field(&raw.name),
        label: uapi::cstr_field(&raw.label),
        num_lines: raw.lines,
    })
}

/// Lazy iterator over the GPIO chips discovered in one directory scan.
///
/// The candidate list is captured at construction, so an unreadable device
/// directory fails at acquisition rather than mid-listing. Each `next()`
/// probes a single device node and yields `Result<ChipInfo>`; probe failures
/// are yielded as [`Error::Chip`] items so the caller decides whether to skip
/// or abort. The iterator is finite and one-pass.
#[derive(Debug)]
pub struct Chips {
    devices: std::vec::IntoIter<PathBuf>,
}

impl Chips {
    /// Discovers chips under [`DEV_DIR`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Enumerate`] when the device directory cannot be read.
    pub fn enumerate() -> Result<Self> {
        Self::in_dir(Path::new(DEV_DIR))
    }

    /// Discovers chips under an alternate device directory.
    ///
    /// Intended for tests and for containers that expose device nodes
    /// somewhere other than `/dev`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Enumerate`] when `dir` cannot be read.
    pub fn in_dir(dir: &Path) -> Result<Self> {
        let devices = chip_paths(dir)?;
        debug!(dir = %dir.display(), candidates = devices.len(), "scanned device directory");
        Ok(Self {
            devices: devices.into_iter(),
        })
    }
}

impl Iterator for Chips {
    type Item = Result<ChipInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        self.devices.next().map(|path| chip_info(&path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.devices.size_hint()
    }
}
