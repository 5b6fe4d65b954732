//! # Code Generation
//!
//! Converts IR programs to ESC/POS bytes.

use super::ops::{Op, Program};
use crate::protocol::{commands, graphics, text};

impl Program {
    /// Compile the IR program to ESC/POS bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => out.extend(commands::init()),
                Op::Cut => out.extend(commands::cut()),

                // ===== Style =====
                Op::SetAlign(alignment) => out.extend(text::align(*alignment)),
                Op::SetFont(font) => out.extend(text::font(*font)),
                Op::SetEmphasis(enabled) => out.extend(text::emphasis(*enabled)),
                Op::SetSize(size) => out.extend(text::size(*size)),

                // ===== Content =====
                Op::Text(s) => out.extend_from_slice(s.as_bytes()),
                Op::Newline => out.push(commands::LF),
                Op::Raw(bytes) => out.extend_from_slice(bytes),
                Op::Raster {
                    bytes_per_line,
                    height,
                    data,
                } => out.extend(graphics::raster(*bytes_per_line, *height, data)),
            }
        }

        out
    }
}
