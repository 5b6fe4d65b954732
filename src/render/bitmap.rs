//! # Bitmap Converter
//!
//! Turns an encoded still image (PNG, JPEG, GIF, BMP, ...) into a packed
//! monochrome raster ready for `GS v 0`.
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──► decode ──► flatten alpha onto white ──► cap width (Lanczos3)
//!       ──► luma ──► black/white ──► pack MSB-first rows
//! ```
//!
//! Transparent regions are composited onto white first. Without that step
//! a transparent logo background comes out as solid black on most printers.

use std::borrow::Cow;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbImage};
use tracing::debug;

use super::dither::{Dithering, pack_row};
use crate::error::ConversionError;
use crate::protocol::graphics::{self, MAX_RASTER_DIMENSION};

/// Standard alphabet, padding optional.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A packed 1-bit image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels after any downsampling
    pub width: u32,
    /// Height in pixels (rows)
    pub height: u16,
    /// `ceil(width / 8)`
    pub bytes_per_line: u16,
    /// `bytes_per_line * height` bytes, 1 = black
    pub data: Vec<u8>,
}

impl RasterImage {
    /// The complete `GS v 0` command for this image.
    pub fn command(&self) -> Vec<u8> {
        graphics::raster(self.bytes_per_line, self.height, &self.data)
    }

    /// Whether the pixel at `(x, y)` prints black; `None` outside the image.
    pub fn is_black(&self, x: u32, y: u16) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.bytes_per_line as usize + (x / 8) as usize;
        self.data.get(index).map(|byte| byte & (0x80 >> (x % 8)) != 0)
    }
}

/// Decode a base64 image payload, tolerating the `data:<mime>;base64,` prefix
/// browsers produce, missing padding and embedded line breaks.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, ConversionError> {
    let encoded = match payload.find("base64,") {
        Some(idx) => &payload[idx + "base64,".len()..],
        None => payload,
    };

    let encoded: Cow<'_, str> = if encoded.contains(|c: char| c.is_ascii_whitespace()) {
        Cow::Owned(encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(encoded)
    };

    Ok(LENIENT_BASE64.decode(encoded.as_bytes())?)
}

/// Convert encoded image bytes into a raster no wider than `max_width` pixels.
///
/// A `max_width` of zero disables the width cap. Height is only ever scaled
/// along with width to preserve the aspect ratio.
pub fn convert(
    image_bytes: &[u8],
    max_width: u32,
    dithering: Dithering,
) -> Result<RasterImage, ConversionError> {
    let img = image::load_from_memory(image_bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ConversionError::Empty);
    }

    let mut rgb = flatten_onto_white(&img);

    if max_width > 0 && width > max_width {
        let new_height = ((height as u64 * max_width as u64) / width as u64).max(1) as u32;
        debug!(width, height, new_width = max_width, new_height, "downsampling image");
        rgb = imageops::resize(&rgb, max_width, new_height, FilterType::Lanczos3);
    }

    let (width, height) = rgb.dimensions();
    let bytes_per_line = width.div_ceil(8) as usize;
    if height as usize > MAX_RASTER_DIMENSION || bytes_per_line > MAX_RASTER_DIMENSION {
        return Err(ConversionError::TooLarge { width, height });
    }

    let mut data = Vec::with_capacity(bytes_per_line * height as usize);
    let mut row = Vec::with_capacity(width as usize);
    for y in 0..height {
        row.clear();
        for x in 0..width {
            let luma = luma(rgb.get_pixel(x, y).0);
            row.push(dithering.is_black(x as usize, y as usize, luma));
        }
        data.extend(pack_row(&row));
    }

    Ok(RasterImage {
        width,
        height: height as u16,
        bytes_per_line: bytes_per_line as u16,
        data,
    })
}

/// Composite any alpha channel onto an opaque white background.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8| -> u8 {
            let a = a as u32;
            ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8
        };
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

/// ITU-R 601-2 luma.
#[inline]
fn luma([r, g, b]: [u8; 3]) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}
