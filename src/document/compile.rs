//! # Receipt Compiler
//!
//! Walks the element list once, in order, and drives the command emitter.
//! The only lookahead is one element, used to decide whether a table row
//! closes its table with a rule.
//!
//! Compilation cannot fail. Every buffer starts with `ESC @` and ends with
//! the cut; per-element trouble is reported as [`Diagnostic`]s next to it.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::types::{ContentElement, Scalar, Variant};
use super::{customer, kitchen};
use crate::ir::Program;
use crate::layout::number;
use crate::printer::PrinterConfig;

/// A non-fatal problem met while compiling one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An image element could not be decoded and was left out.
    Decode { index: usize, reason: String },
    /// A numeric field did not parse and was printed verbatim.
    FormatFallback {
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl Diagnostic {
    pub fn index(&self) -> usize {
        match self {
            Diagnostic::Decode { index, .. } | Diagnostic::FormatFallback { index, .. } => *index,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Decode { index, reason } => {
                write!(f, "image element {} could not be decoded: {}", index, reason)
            }
            Diagnostic::FormatFallback {
                index,
                field,
                value,
            } => write!(
                f,
                "element {}: {} '{}' is not a number, printed as-is",
                index, field, value
            ),
        }
    }
}

/// Output of [`compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// Raw ESC/POS bytes, ready to write to the device verbatim
    pub bytes: Vec<u8>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile elements into a cut-terminated ESC/POS buffer.
pub fn compile(elements: &[ContentElement], variant: Variant, config: &PrinterConfig) -> Compiled {
    let (program, diagnostics) = compile_program(elements, variant, config);
    Compiled {
        bytes: program.to_bytes(),
        diagnostics,
    }
}

/// Compile elements into an IR program without generating bytes.
pub fn compile_program(
    elements: &[ContentElement],
    variant: Variant,
    config: &PrinterConfig,
) -> (Program, Vec<Diagnostic>) {
    let mut ctx = EmitContext::new(config);
    ctx.program.init();

    for (index, element) in elements.iter().enumerate() {
        ctx.index = index;
        match variant {
            Variant::Customer => customer::emit(&mut ctx, element, elements.get(index + 1)),
            Variant::Kitchen => kitchen::emit(&mut ctx, element),
        }
    }

    match variant {
        Variant::Customer => customer::finish(&mut ctx),
        Variant::Kitchen => kitchen::finish(&mut ctx),
    }

    debug!(
        %variant,
        elements = elements.len(),
        ops = ctx.program.len(),
        diagnostics = ctx.diagnostics.len(),
        "compiled receipt"
    );

    (ctx.program, ctx.diagnostics)
}

// ============================================================================
// EMIT CONTEXT
// ============================================================================

/// State threaded through element emitters.
pub(super) struct EmitContext<'a> {
    pub program: Program,
    pub config: &'a PrinterConfig,
    pub diagnostics: Vec<Diagnostic>,
    /// Position of the element being emitted
    pub index: usize,
}

impl<'a> EmitContext<'a> {
    fn new(config: &'a PrinterConfig) -> Self {
        Self {
            program: Program::new(),
            config,
            diagnostics: Vec::new(),
            index: 0,
        }
    }

    /// Truncated integer display of `value`, or the value verbatim.
    ///
    /// Also returns the truncated number when parsing succeeded.
    pub fn figure(&mut self, field: &'static str, value: &Scalar) -> (String, Option<f64>) {
        match number::parse(value.as_str()).map(f64::trunc) {
            Some(n) => (number::integer_part(n), Some(n)),
            None => {
                self.fallback(field, value.as_str());
                (value.to_string(), None)
            }
        }
    }

    /// Currency-prefixed truncated amount. A value that does not parse is
    /// printed as sent, without the currency marker.
    pub fn money(&mut self, field: &'static str, value: &Scalar) -> String {
        match self.figure(field, value) {
            (amount, Some(_)) => format!("{}{}", self.config.currency, amount),
            (verbatim, None) => verbatim,
        }
    }

    pub fn fallback(&mut self, field: &'static str, value: &str) {
        debug!(index = self.index, field, value, "numeric field printed verbatim");
        self.diagnostics.push(Diagnostic::FormatFallback {
            index: self.index,
            field,
            value: value.to_string(),
        });
    }

    pub fn decode_failed(&mut self, reason: String) {
        warn!(index = self.index, %reason, "skipping image element");
        self.diagnostics.push(Diagnostic::Decode {
            index: self.index,
            reason,
        });
    }

    /// Centered emphasized line, shared by both variants.
    pub fn header(&mut self, text: &str) {
        use crate::protocol::text::Alignment;

        self.program
            .align(Alignment::Center)
            .emphasis(true)
            .line(text)
            .emphasis(false)
            .align(Alignment::Left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::types::*;

    const INIT: [u8; 2] = [0x1B, 0x40];
    const CUT: [u8; 4] = [0x1D, 0x56, 0x41, 0x03];

    fn sample() -> Vec<ContentElement> {
        vec![
            ContentElement::Header(Header { text: "CAFE".into() }),
            ContentElement::Text(Text::new("Table 5")),
            ContentElement::Item(Item::new("Cola", 2, 5.5)),
            ContentElement::Total(Total {
                amount: Some("11".into()),
            }),
        ]
    }

    #[test]
    fn test_empty_input_is_still_framed() {
        for variant in [Variant::Customer, Variant::Kitchen] {
            let out = compile(&[], variant, &PrinterConfig::POS80);
            assert!(out.bytes.starts_with(&INIT));
            assert!(out.bytes.ends_with(&CUT));
            assert!(out.diagnostics.is_empty());
        }
    }

    #[test]
    fn test_exactly_one_init_and_cut_op() {
        use crate::ir::Op;

        for variant in [Variant::Customer, Variant::Kitchen] {
            let (program, _) = compile_program(&sample(), variant, &PrinterConfig::POS80);
            assert_eq!(program.iter().filter(|op| **op == Op::Init).count(), 1);
            assert_eq!(program.iter().filter(|op| **op == Op::Cut).count(), 1);
            assert_eq!(program.ops.first(), Some(&Op::Init));
            assert_eq!(program.ops.last(), Some(&Op::Cut));
        }
    }

    #[test]
    fn test_deterministic() {
        for variant in [Variant::Customer, Variant::Kitchen] {
            let a = compile(&sample(), variant, &PrinterConfig::POS80);
            let b = compile(&sample(), variant, &PrinterConfig::POS80);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_format_fallback_diagnostic() {
        let elements = vec![ContentElement::Item(Item::new("Tea", "two", 20))];
        let out = compile(&elements, Variant::Customer, &PrinterConfig::POS80);
        assert_eq!(
            out.diagnostics,
            vec![Diagnostic::FormatFallback {
                index: 0,
                field: "quantity",
                value: "two".into()
            }]
        );
    }

    #[test]
    fn test_diagnostic_display_and_json() {
        let d = Diagnostic::Decode {
            index: 3,
            reason: "bad png".into(),
        };
        assert_eq!(d.to_string(), "image element 3 could not be decoded: bad png");
        assert_eq!(d.index(), 3);
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            serde_json::json!({"kind": "decode", "index": 3, "reason": "bad png"})
        );
    }
}
