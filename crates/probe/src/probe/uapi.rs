//! Raw Linux GPIO character-device ABI.
//!
//! Mirrors the `gpiochip_info` layout and request number from
//! `include/uapi/linux/gpio.h`. Only the chip-information call is used here;
//! line requests and event watches are a different part of the ABI entirely.

use crate::common::constants::MAX_NAME_SIZE;

/// `GPIO_GET_CHIPINFO_IOCTL`: `_IOR(0xB4, 0x01, struct gpiochip_info)`.
pub(crate) const GPIO_GET_CHIPINFO_IOCTL: libc::c_ulong = 0x8044_b401;

/// In-kernel `struct gpiochip_info`.
#[repr(C)]
#[derive(Debug)]
pub(crate) struct GpioChipInfo {
    /// Kernel name of the chip, NUL-terminated (may be empty).
    pub name: [u8; MAX_NAME_SIZE],
    /// Functional label of the chip, NUL-terminated (may be empty).
    pub label: [u8; MAX_NAME_SIZE],
    /// Number of GPIO lines on this chip.
    pub lines: u32,
}

impl GpioChipInfo {
    /// Returns a zeroed buffer for the kernel to fill in.
    pub(crate) const fn zeroed() -> Self {
        Self {
            name: [0; MAX_NAME_SIZE],
            label: [0; MAX_NAME_SIZE],
            lines: 0,
        }
    }
}

/// Decodes a fixed-width NUL-terminated field; an empty field decodes to `None`.
pub(crate) fn cstr_field(raw: &[u8]) -> Option<String> {
    let len = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    if len == 0 {
        None
    } else {
        Some(String::from_utf8_lossy(&raw[..len]).into_owned())
    }
}
