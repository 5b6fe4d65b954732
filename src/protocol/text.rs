//! # ESC/POS Text Styling
//!
//! Alignment, font, emphasis and character size commands.
//!
//! Each builder emits a complete directive that fully specifies the mode it
//! sets. Callers never need to know what was emitted before.
//!
//! ## Font Geometry (80mm paper)
//!
//! | Font | Columns | Used for |
//! |------|---------|----------|
//! | Normal (Font A) | 48 | Body text, tables |
//! | Small (Font B) | 64 | Address and phone lines |

use super::commands::ESC;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Parse an alignment keyword, case-insensitively.
    ///
    /// Returns `None` for anything other than `left`, `center` or `right`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" | "centre" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// ## Parameters
///
/// - `n = 0`: Left
/// - `n = 1`: Center
/// - `n = 2`: Right
///
/// Takes effect at the start of the next line; reset by `ESC @`.
#[inline]
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Character fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A, 12x24 dots
    #[default]
    Normal = 0,
    /// Font B, 9x17 dots
    Small = 1,
}

/// # Select Character Font (ESC M n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
#[inline]
pub fn font(font: Font) -> Vec<u8> {
    vec![ESC, b'M', font as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Emphasized Mode On (ESC E 1)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 45 01 |
#[inline]
pub fn emphasis_on() -> Vec<u8> {
    vec![ESC, b'E', 0x01]
}

/// # Emphasized Mode Off (ESC E 0)
#[inline]
pub fn emphasis_off() -> Vec<u8> {
    vec![ESC, b'E', 0x00]
}

/// Convenience for `emphasis_on`/`emphasis_off`.
#[inline]
pub fn emphasis(enabled: bool) -> Vec<u8> {
    if enabled { emphasis_on() } else { emphasis_off() }
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size presets, expressed through the print mode byte of `ESC !`.
///
/// ```text
/// bit 3 (0x08)  emphasized
/// bit 4 (0x10)  double height
/// bit 5 (0x20)  double width
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSize {
    /// All mode bits clear
    #[default]
    Normal,
    /// Double width and double height
    Double,
    /// Double width, double height and emphasized
    Quadruple,
}

impl CharSize {
    /// The `n` parameter of `ESC ! n`.
    pub const fn mode_byte(self) -> u8 {
        match self {
            CharSize::Normal => 0x00,
            CharSize::Double => 0x30,
            CharSize::Quadruple => 0x38,
        }
    }
}

/// # Select Print Mode (ESC ! n)
///
/// ## Protocol Details
///
/// | Size | Bytes |
/// |------|-------|
/// | Normal | 1B 21 00 |
/// | Double | 1B 21 30 |
/// | Quadruple | 1B 21 38 |
///
/// `ESC !` also clears emphasis set by `ESC E` on most printers, which is why
/// the compiler never mixes the two inside one line.
#[inline]
pub fn size(size: CharSize) -> Vec<u8> {
    vec![ESC, b'!', size.mode_byte()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_alignment_keyword() {
        assert_eq!(Alignment::from_keyword("CENTER"), Some(Alignment::Center));
        assert_eq!(Alignment::from_keyword(" right "), Some(Alignment::Right));
        assert_eq!(Alignment::from_keyword("justify"), None);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(Font::Small), vec![0x1B, 0x4D, 0x01]);
        assert_eq!(font(Font::Normal), vec![0x1B, 0x4D, 0x00]);
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(emphasis_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(emphasis_off(), vec![0x1B, 0x45, 0x00]);
        assert_eq!(emphasis(true), emphasis_on());
    }

    #[test]
    fn test_size() {
        assert_eq!(size(CharSize::Normal), vec![0x1B, 0x21, 0x00]);
        assert_eq!(size(CharSize::Double), vec![0x1B, 0x21, 0x30]);
        assert_eq!(size(CharSize::Quadruple), vec![0x1B, 0x21, 0x38]);
    }
}
