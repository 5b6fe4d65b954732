//! # ESC/POS Printer Control
//!
//! Printer-level commands and the escape byte constants shared by the
//! other protocol modules.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Three bytes: `ESC a n`, `ESC E n`, `ESC M n`, `ESC ! n`
//! - Multi-byte with parameters: `GS V m n`, `GS v 0 m xL xH yL yH data...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix, used for cut and raster
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets every mode (alignment, font, emphasis,
/// character size) to power-on defaults.
///
/// ## Protocol Details
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | ESC @ |
/// | Hex    | 1B 40 |
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Feed and Cut (GS V A n)
///
/// Function B of `GS V`: feeds paper to the cutting position plus `n`
/// motion units, then performs a full cut.
///
/// ## Protocol Details
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | GS V A 3 |
/// | Hex    | 1D 56 41 03 |
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', 0x41, 0x03]
}

/// Split a `u16` into `[low, high]` bytes.
#[inline]
pub fn u16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}
