//! # Rendering Module
//!
//! Turns embedded images into printable 1-bit rasters.
//!
//! - [`bitmap`]: Decode, flatten, resize and pack an image
//! - [`dither`]: Threshold and Bayer 8x8 binarization
//!
//! ```
//! use comanda::render::dither::{Dithering, pack_row};
//!
//! // Eight pixels, darkest first
//! let pixels: Vec<bool> = (0..8)
//!     .map(|x| Dithering::Threshold.is_black(x, 0, x as u8 * 32))
//!     .collect();
//! let row = pack_row(&pixels);
//! assert_eq!(row, vec![0b1111_0000]);
//! ```

pub mod bitmap;
pub mod dither;
