//! Register map of the IS31FL3741-class matrix controller.
//!
//! Addresses, keys, and defaults come straight from the controller datasheet.
//! Pixel data lives in four RAM pages selected through [`PAGE_SELECT`]; the
//! function registers live on page 4.

/// 7-bit I2C device address. The two lowest bits are strapped by the ADDR pin.
pub const DEVICE_ADDRESS: u8 = 0b011_0000;

/// Writing [`LOCK_KEY`] here unlocks the page-select register for one write.
pub const COMMAND_LOCK: u8 = 0xFE;

/// Key that unlocks the page-select register.
pub const LOCK_KEY: u8 = 0xC5;

/// Selects which RAM page subsequent reads and writes target.
pub const PAGE_SELECT: u8 = 0xFD;

/// Pages 0..=3 hold pixel data; page 4 holds the function registers.
pub const PAGE_COUNT: u8 = 5;

/// RAM page holding the function/configuration registers.
pub const FUNCTION_PAGE: u8 = 0x04;

/// Configuration register on the function page.
///
/// High four bits select how many SW columns are skipped during scan, then
/// one logic-voltage-level bit, two open/short-detection bits, and the
/// software-shutdown bit (0 = shutdown, 1 = normal operation).
pub const CONFIGURATION: u8 = 0x00;

/// Normal operation, high logic voltage, full scan, detection off.
pub const CONFIGURATION_DEFAULT: u8 = 0b0000_1001;

/// Global current control, 0 (no current) to 255 (full current).
pub const GLOBAL_CURRENT: u8 = 0x01;

/// Full global current.
pub const GLOBAL_CURRENT_DEFAULT: u8 = 0xFF;

/// Pull resistor selection: high nibble row pull-downs, low nibble column
/// pull-ups, three significant bits each.
pub const PULL_RESISTORS: u8 = 0x02;

/// 16 kOhm pull-down and pull-up resistors.
pub const PULL_RESISTORS_DEFAULT: u8 = 0b0110_0110;

/// PWM frequency setting, low four bits (0b0000 = 29 kHz).
pub const PWM_FREQUENCY: u8 = 0x36;

/// 29 kHz PWM.
pub const PWM_FREQUENCY_DEFAULT: u8 = 0b0000_0000;

/// Writing [`RESET_KEY`] here resets every controller register.
pub const RESET: u8 = 0x3F;

/// Key that triggers the reset register.
pub const RESET_KEY: u8 = 0xAE;

/// Registers per even pixel page (pages 0 and 2 hold 0x00..=0xB3).
pub const EVEN_PAGE_REGISTERS: usize = 0xB4;

/// Wired registers per odd pixel page (pages 1 and 3).
///
/// The RAM itself extends to 0xAA, but registers 0xA1..=0xAA back no LED and
/// are never streamed.
pub const ODD_PAGE_REGISTERS: usize = 0xA1;
