//! # ESC/POS Raster Graphics
//!
//! Monochrome bitmaps are printed with the raster bit image command
//! `GS v 0`. The image is sent row by row, each row packed 8 pixels per byte.
//!
//! ## Data Format
//!
//! ```text
//! Byte:    [  byte 0  ][  byte 1  ] ...
//! Bits:    7 6 5 4 3 2 1 0  7 6 5 4 ...
//! Pixels:  0 1 2 3 4 5 6 7  8 9 ...
//! ```
//!
//! - MSB is the leftmost pixel
//! - 1 = black (dot printed), 0 = white
//! - Rows are padded on the right to a whole number of bytes

use super::commands::{GS, u16_le};

/// Largest value either raster dimension can carry (`xH`/`yH` are one byte).
pub const MAX_RASTER_DIMENSION: usize = u16::MAX as usize;

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// ## Protocol Details
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | GS v 0 m xL xH yL yH d1...dk |
/// | Hex    | 1D 76 30 m xL xH yL yH ... |
///
/// ## Parameters
///
/// - `m = 0`: normal density (the only mode emitted here)
/// - `bytes_per_line`: `xL + xH * 256`, horizontal size in **bytes**
/// - `height`: `yL + yH * 256`, vertical size in dots
/// - `data`: `bytes_per_line * height` bytes
///
/// ## Example
///
/// ```
/// use comanda::protocol::graphics;
///
/// let cmd = graphics::raster(39, 2, &[0u8; 78]);
/// assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0x00, 39, 0, 2, 0]);
/// assert_eq!(cmd.len(), 8 + 78);
/// ```
pub fn raster(bytes_per_line: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert_eq!(
        data.len(),
        bytes_per_line as usize * height as usize,
        "raster data length must be bytes_per_line * height"
    );

    let [xl, xh] = u16_le(bytes_per_line);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.extend_from_slice(&[GS, b'v', b'0', 0x00, xl, xh, yl, yh]);
    cmd.extend_from_slice(data);
    cmd
}
