//! # Monochrome Conversion
//!
//! Thermal printers can only place a dot or leave the paper white. This
//! module decides, per pixel, which of the two a grayscale value becomes,
//! and packs the result into printer raster rows.
//!
//! ## Methods
//!
//! | Method | Speed | Output |
//! |--------|-------|--------|
//! | Threshold (default) | Fastest | Hard black/white split at mid-gray |
//! | Bayer 8x8 | Fast | Ordered halftone, better for photos |
//!
//! Logos and receipt artwork are mostly flat black on white, so the global
//! threshold keeps their edges crisp. Both methods are deterministic.
//!
//! ## Usage Example
//!
//! ```
//! use comanda::render::dither::{self, Dithering};
//!
//! // Luma 0 is black, 255 is white
//! assert!(Dithering::Threshold.is_black(0, 0, 10));
//! assert!(!Dithering::Threshold.is_black(0, 0, 200));
//!
//! let row = vec![true, true, false, false, true, false, true, false];
//! assert_eq!(dither::pack_row(&row), vec![0b11001010]);
//! ```

use std::fmt;
use std::str::FromStr;

/// Luma values strictly below this are printed black by [`Dithering::Threshold`].
pub const THRESHOLD_LEVEL: u8 = 128;

/// Bayer 8x8 dithering matrix, values 0-63.
pub const BAYER8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Pixel classification method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dithering {
    /// Global threshold at [`THRESHOLD_LEVEL`].
    #[default]
    Threshold,
    /// Bayer 8x8 ordered dithering.
    Bayer,
}

impl Dithering {
    /// Decide whether the pixel at `(x, y)` with the given luma prints black.
    #[inline]
    pub fn is_black(self, x: usize, y: usize, luma: u8) -> bool {
        match self {
            Dithering::Threshold => luma < THRESHOLD_LEVEL,
            Dithering::Bayer => {
                let intensity = (255 - luma) as f32 / 255.0;
                intensity > bayer_threshold(x, y)
            }
        }
    }
}

impl FromStr for Dithering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "threshold" => Ok(Dithering::Threshold),
            "bayer" => Ok(Dithering::Bayer),
            other => Err(format!(
                "unknown dithering method '{}' (expected threshold or bayer)",
                other
            )),
        }
    }
}

impl fmt::Display for Dithering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dithering::Threshold => f.write_str("threshold"),
            Dithering::Bayer => f.write_str("bayer"),
        }
    }
}

/// Bayer threshold for a pixel position, in the open range (0, 1).
///
/// ```text
/// threshold = (BAYER8[y mod 8][x mod 8] + 0.5) / 64
/// ```
///
/// Black (intensity 1.0) always prints and white (0.0) never does.
#[inline]
pub fn bayer_threshold(x: usize, y: usize) -> f32 {
    let matrix_value = BAYER8[y & 7][x & 7];
    (matrix_value as f32 + 0.5) / 64.0
}

/// Pack a row of boolean pixel values into bytes.
///
/// - Bit 7 (MSB) = leftmost pixel
/// - 1 = black (print dot), 0 = white
/// - The last byte is padded with white on the right
///
/// ```
/// use comanda::render::dither::pack_row;
///
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bayer_matrix_values() {
        let mut seen = [false; 64];
        for row in &BAYER8 {
            for &val in row {
                assert!(val < 64);
                assert!(!seen[val as usize], "Duplicate value {}", val);
                seen[val as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_bayer_threshold_range() {
        for y in 0..8 {
            for x in 0..8 {
                let t = bayer_threshold(x, y);
                assert!(t > 0.0 && t < 1.0);
                assert_eq!(t, bayer_threshold(x + 8, y + 8));
            }
        }
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(Dithering::Threshold.is_black(0, 0, 127));
        assert!(!Dithering::Threshold.is_black(0, 0, 128));
    }

    #[test]
    fn test_extremes_agree_across_methods() {
        for method in [Dithering::Threshold, Dithering::Bayer] {
            for y in 0..16 {
                for x in 0..16 {
                    assert!(method.is_black(x, y, 0), "{} black at ({},{})", method, x, y);
                    assert!(!method.is_black(x, y, 255), "{} white at ({},{})", method, x, y);
                }
            }
        }
    }

    #[test]
    fn test_bayer_mid_gray_is_halftone() {
        let count = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| Dithering::Bayer.is_black(x, y, 128))
            .count();
        assert!(count > 20 && count < 44, "got {}", count);
    }

    #[test]
    fn test_parse_dithering() {
        assert_eq!("Bayer".parse::<Dithering>(), Ok(Dithering::Bayer));
        assert_eq!("threshold".parse::<Dithering>(), Ok(Dithering::Threshold));
        assert!("floyd".parse::<Dithering>().is_err());
    }

    #[test]
    fn test_pack_row_8_pixels() {
        let row = vec![true, false, true, false, true, false, true, false];
        assert_eq!(pack_row(&row), vec![0xAA]);
    }

    #[test]
    fn test_pack_row_padding() {
        let row = vec![false, false, false, false, false, false, false, false, true];
        assert_eq!(pack_row(&row), vec![0x00, 0x80]);
    }

    #[test]
    fn test_pack_row_empty() {
        assert!(pack_row(&[]).is_empty());
    }
}
