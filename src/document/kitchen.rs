//! Kitchen ticket emission. Only headers, text and items are printed; items
//! and table numbers go out at quadruple size so they read from across the
//! pass. No prices, no footer.

use super::compile::EmitContext;
use super::types::{ContentElement, Scalar};
use crate::protocol::text::{Alignment, CharSize};

pub(super) fn emit(ctx: &mut EmitContext<'_>, element: &ContentElement) {
    match element {
        ContentElement::Header(h) => ctx.header(&h.text),
        ContentElement::Text(t) => {
            ctx.program.align(t.alignment());
            if t.text.to_lowercase().contains("table") {
                ctx.program
                    .size(CharSize::Quadruple)
                    .line(t.text.as_str())
                    .size(CharSize::Normal);
            } else {
                ctx.program.size(CharSize::Normal).line(t.text.as_str());
            }
            ctx.program.align(Alignment::Left);
        }
        ContentElement::Item(item) => {
            let quantity = item.quantity.clone().unwrap_or_else(|| Scalar::from(1));
            let (quantity, _) = ctx.figure("quantity", &quantity);
            ctx.program
                .size(CharSize::Quadruple)
                .line(format!("{} {}", item.name, quantity))
                .size(CharSize::Normal);
        }
        _ => {}
    }
}

pub(super) fn finish(ctx: &mut EmitContext<'_>) {
    ctx.program.newline().cut();
}
