//! Listing output tests.
//!
//! Covers the fixed line format, the `?` placeholder substitution, the
//! banner-only empty case, and the skip-on-probe-failure behavior.

use std::io;
use std::path::PathBuf;

use gpiolist_core::report::{BANNER, write_listing};
use gpiolist_core::{ChipInfo, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn chip(name: Option<&str>, label: Option<&str>, num_lines: u32) -> ChipInfo {
    ChipInfo {
        name: name.map(str::to_owned),
        label: label.map(str::to_owned),
        num_lines,
    }
}

#[rstest]
#[case(chip(Some("gpiochip0"), Some("pinctrl-bcm2711"), 58), "chip: gpiochip0, label: pinctrl-bcm2711, lines: 58")]
#[case(chip(Some("gpiochip1"), None, 8), "chip: gpiochip1, label: ?, lines: 8")]
#[case(chip(None, Some("soc-gpio"), 32), "chip: ?, label: soc-gpio, lines: 32")]
#[case(chip(None, None, 0), "chip: ?, label: ?, lines: 0")]
fn chip_line_rendering(#[case] descriptor: ChipInfo, #[case] expected: &str) {
    assert_eq!(descriptor.to_string(), expected);
}

#[test]
fn empty_listing_is_banner_only() {
    let chips: Vec<gpiolist_core::Result<ChipInfo>> = Vec::new();
    let mut out = Vec::new();
    write_listing(&mut out, chips).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{BANNER}\n"));
}

#[test]
fn listing_renders_one_line_per_chip_in_order() {
    let chips = vec![
        Ok(chip(Some("gpiochip0"), Some("soc-gpio"), 32)),
        Ok(chip(Some("gpiochip1"), None, 8)),
    ];
    let mut out = Vec::new();
    write_listing(&mut out, chips).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Enumerate chips:\n\
         chip: gpiochip0, label: soc-gpio, lines: 32\n\
         chip: gpiochip1, label: ?, lines: 8\n"
    );
}

#[test]
fn failed_probe_is_skipped_without_output() {
    let chips = vec![
        Err(Error::Chip {
            path: PathBuf::from("/dev/gpiochip0"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }),
        Ok(chip(Some("gpiochip1"), Some("soc-gpio"), 16)),
    ];
    let mut out = Vec::new();
    write_listing(&mut out, chips).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Enumerate chips:\nchip: gpiochip1, label: soc-gpio, lines: 16\n"
    );
}

#[test]
fn writer_errors_propagate() {
    struct Full;

    impl io::Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::StorageFull))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let chips: Vec<gpiolist_core::Result<ChipInfo>> = Vec::new();
    let err = write_listing(&mut Full, chips).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::StorageFull);
}
