//! # IR Opcodes
//!
//! Each opcode is a single, atomic printer directive or payload.

use crate::protocol::text::{Alignment, CharSize, Font};
use crate::render::bitmap::RasterImage;

/// A single IR operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ===== Printer Control =====
    /// Initialize printer (ESC @)
    Init,
    /// Feed to the cutter and cut (GS V A 3)
    Cut,

    // ===== Style =====
    SetAlign(Alignment),
    SetFont(Font),
    SetEmphasis(bool),
    SetSize(CharSize),

    // ===== Content =====
    /// Literal text, emitted as UTF-8
    Text(String),
    /// Line feed
    Newline,
    /// Raw bytes passed through untouched
    Raw(Vec<u8>),
    /// Packed 1-bit raster image (GS v 0)
    Raster {
        bytes_per_line: u16,
        height: u16,
        data: Vec<u8>,
    },
}

/// A sequence of ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a program with an initial Init op.
    pub fn with_init() -> Self {
        Self {
            ops: vec![Op::Init],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) -> &mut Self {
        self.ops.push(op);
        self
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    pub fn init(&mut self) -> &mut Self {
        self.push(Op::Init)
    }

    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.push(Op::SetAlign(alignment))
    }

    pub fn font(&mut self, font: Font) -> &mut Self {
        self.push(Op::SetFont(font))
    }

    pub fn emphasis(&mut self, enabled: bool) -> &mut Self {
        self.push(Op::SetEmphasis(enabled))
    }

    pub fn size(&mut self, size: CharSize) -> &mut Self {
        self.push(Op::SetSize(size))
    }

    /// Append text without a line feed.
    pub fn write_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Op::Text(text.into()))
    }

    /// Append text followed by a line feed.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_text(text).newline()
    }

    pub fn newline(&mut self) -> &mut Self {
        self.push(Op::Newline)
    }

    pub fn write_raw(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.push(Op::Raw(bytes.into()))
    }

    pub fn raster(&mut self, image: RasterImage) -> &mut Self {
        self.push(Op::Raster {
            bytes_per_line: image.bytes_per_line,
            height: image.height,
            data: image.data,
        })
    }

    pub fn cut(&mut self) -> &mut Self {
        self.push(Op::Cut)
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Concatenated text of every `Text`/`Newline` op, for inspection.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                Op::Text(s) => out.push_str(s),
                Op::Newline => out.push('\n'),
                _ => {}
            }
        }
        out
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
