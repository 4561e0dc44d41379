//! Constants shared across the enumeration library.

/// Directory scanned for GPIO character-device nodes.
pub const DEV_DIR: &str = "/dev";

/// File-name prefix of a GPIO character-device node (`gpiochip<N>`).
pub const CHIP_PREFIX: &str = "gpiochip";

/// Placeholder rendered for a name or label the kernel did not report.
pub const MISSING_FIELD: &str = "?";

/// Width of the fixed name and label fields in the kernel chip-info structure.
///
/// Matches `GPIO_MAX_NAME_SIZE` from `include/uapi/linux/gpio.h`.
pub const MAX_NAME_SIZE: usize = 32;
