//! # Printer Configuration
//!
//! Rendering constants for a receipt printer profile. Everything the
//! compiler would otherwise hard-code lives here: column geometry, image
//! width cap, currency marker, footer text.
//!
//! ## Profiles
//!
//! | Profile | Paper | Print width | Columns (Font A) | Image cap |
//! |---------|-------|-------------|------------------|-----------|
//! | POS80 | 80mm | 576 dots | 48 | 312 px |
//!
//! ## Usage
//!
//! ```
//! use comanda::printer::PrinterConfig;
//!
//! let config = PrinterConfig::POS80.with_currency("$");
//! assert_eq!(config.currency, "$");
//! assert_eq!(config.layout.total_width(), 45);
//! ```

use std::borrow::Cow;

use crate::layout::ColumnLayout;
use crate::render::dither::Dithering;

/// # Printer Configuration
///
/// ## Physical Properties
///
/// - **width_dots**: Maximum printable width in dots
/// - **max_image_width**: Images wider than this are downsampled, never
///   beyond `width_dots`
///
/// ## Text Layout
///
/// - **layout**: Column widths for tables and amount lines
/// - **rule**: Character repeated to draw separator rules
/// - **currency**: Marker prefixed to subtotal and total amounts
/// - **thank_you**: Customer receipt footer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Profile name
    pub name: Cow<'static, str>,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Image width cap in pixels
    pub max_image_width: u32,

    /// Monochrome conversion method for images
    pub dithering: Dithering,

    pub layout: ColumnLayout,

    pub rule: char,

    pub currency: Cow<'static, str>,

    pub thank_you: Cow<'static, str>,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::POS80
    }
}

impl PrinterConfig {
    /// # Generic 80mm ESC/POS Printer
    ///
    /// ```text
    /// ├── 4mm ──┼────── 72mm printable ──────┼── 4mm ──┤
    /// │ margin  │         576 dots           │ margin  │
    /// ```
    ///
    /// Images are capped at 312 dots, a little over half the paper, which
    /// keeps logos proportionate to 45-column text.
    pub const POS80: Self = Self {
        name: Cow::Borrowed("POS-80"),
        width_dots: 576,
        max_image_width: 312,
        dithering: Dithering::Threshold,
        layout: ColumnLayout::STANDARD,
        rule: '-',
        currency: Cow::Borrowed("Tk."),
        thank_you: Cow::Borrowed("Thank you for your purchase!"),
    };

    pub fn with_currency(mut self, currency: impl Into<Cow<'static, str>>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_max_image_width(mut self, max_image_width: u32) -> Self {
        self.max_image_width = max_image_width;
        self
    }

    pub fn with_dithering(mut self, dithering: Dithering) -> Self {
        self.dithering = dithering;
        self
    }

    /// Widest raster the paper can take: `max_image_width` clamped to the
    /// printable width. A cap of zero means the full printable width.
    pub fn image_width_limit(&self) -> u32 {
        let printable = u32::from(self.width_dots);
        match self.max_image_width {
            0 => printable,
            cap => cap.min(printable),
        }
    }

    /// A full-width separator rule.
    pub fn rule_line(&self) -> String {
        self.layout.separator(self.rule)
    }
}
