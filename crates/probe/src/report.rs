//! Listing output for discovered chips.
//!
//! Renders the banner and one line per chip to any writer. Probe failures
//! yielded by the iterator are logged and skipped, so a chip that disappears
//! between scan and probe does not abort the listing.

use std::io::{self, Write};

use tracing::warn;

use crate::common::error::Result;
use crate::probe::ChipInfo;

/// Heading printed before the per-chip lines.
pub const BANNER: &str = "Enumerate chips:";

/// Writes the chip listing: the banner, then one line per readable chip in
/// iterator order.
///
/// Chips that failed to probe produce a `warn` diagnostic instead of an
/// output line; an empty iterator produces the banner alone.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_listing<W, I>(out: &mut W, chips: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Result<ChipInfo>>,
{
    writeln!(out, "{BANNER}")?;
    for chip in chips {
        match chip {
            Ok(chip) => writeln!(out, "{chip}")?,
            Err(err) => warn!("skipping chip: {err}"),
        }
    }
    Ok(())
}
