//! GPIO chip listing CLI.
//!
//! One-shot diagnostic: enumerate the GPIO controller chips exposed through
//! `/dev/gpiochip*` and print one line per chip. The tool takes no flags or
//! subcommands. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to surface probe
//! diagnostics on stderr; stdout carries only the listing.

use clap::Parser;
use std::io::{self, Write};
use std::process;

use gpiolist_core::Chips;
use gpiolist_core::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gpiolist",
    version,
    about = "List GPIO controller chips",
    long_about = "Enumerate the GPIO chips exposed by the Linux character-device interface\nand print each chip's name, label, and line count.\n\nChips with no reported name or label are shown with a '?' placeholder.\nExits non-zero only when the device directory cannot be scanned at all."
)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    // Acquire the enumeration resource before any output so a scan failure
    // produces exactly one diagnostic and an untouched stdout.
    let chips = match Chips::enumerate() {
        Ok(chips) => chips,
        Err(err) => {
            eprintln!("gpiolist: {err}");
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = report::write_listing(&mut out, chips) {
        eprintln!("gpiolist: {err}");
        process::exit(1);
    }
    out.flush().ok();
}
