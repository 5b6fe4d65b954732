//! Customer receipt emission: every element kind, prices included, closed
//! by a centered thank-you block.

use super::compile::EmitContext;
use super::types::{ContentElement, Discount, Image, Item, Scalar, Subtotal, Total};
use crate::layout::number;
use crate::layout::table::format_item_line;
use crate::protocol::text::{Alignment, Font};
use crate::render::bitmap;

const DISCOUNT_LABEL: &str = "Discount";
const SUBTOTAL_LABEL: &str = "Sub-total";

pub(super) fn emit(ctx: &mut EmitContext<'_>, element: &ContentElement, next: Option<&ContentElement>) {
    match element {
        ContentElement::Header(h) => ctx.header(&h.text),
        ContentElement::Address(a) => {
            ctx.program
                .font(Font::Small)
                .align(Alignment::Left)
                .line(a.text.as_str())
                .font(Font::Normal);
        }
        ContentElement::Phone(p) => {
            ctx.program
                .font(Font::Small)
                .align(Alignment::Left)
                .line(p.text.as_str())
                .font(Font::Normal)
                .newline();
        }
        ContentElement::TableHeader(t) => {
            let line = ctx.config.layout.format_row(&t.columns);
            let rule = ctx.config.rule_line();
            ctx.program.align(Alignment::Left).line(line).line(rule);
        }
        ContentElement::TableRow(r) => {
            let line = ctx.config.layout.format_table_row(&r.columns);
            ctx.program.align(Alignment::Left).line(line);
            // A run of rows is closed by a single rule
            if !matches!(next, Some(ContentElement::TableRow(_))) {
                let rule = ctx.config.rule_line();
                ctx.program.line(rule);
            }
        }
        ContentElement::Item(item) => emit_item(ctx, item),
        ContentElement::Discount(d) => emit_discount(ctx, d),
        ContentElement::Subtotal(s) => emit_subtotal(ctx, s),
        ContentElement::Total(t) => emit_total(ctx, t),
        ContentElement::Text(t) => {
            ctx.program
                .align(t.alignment())
                .line(t.text.as_str())
                .align(Alignment::Left);
        }
        ContentElement::Image(img) => emit_image(ctx, img),
    }
}

pub(super) fn finish(ctx: &mut EmitContext<'_>) {
    let thank_you = ctx.config.thank_you.to_string();
    ctx.program
        .align(Alignment::Center)
        .newline()
        .line(thank_you)
        .newline()
        .cut();
}

fn emit_item(ctx: &mut EmitContext<'_>, item: &Item) {
    let quantity = item.quantity.clone().unwrap_or_else(|| Scalar::from(1));
    let price = item.price.clone().unwrap_or_else(|| Scalar::from(0));

    // Both factors are truncated before multiplying: 2 x 5.5 totals 10
    let (quantity_text, q) = ctx.figure("quantity", &quantity);
    let (price_text, p) = ctx.figure("price", &price);
    let total_text = match (q, p) {
        (Some(q), Some(p)) => number::integer_part(q * p),
        _ => String::new(),
    };

    ctx.program.line(format_item_line(
        &item.name,
        &quantity_text,
        &price_text,
        &total_text,
    ));
}

fn emit_discount(ctx: &mut EmitContext<'_>, discount: &Discount) {
    let amount = discount.amount.as_str();
    let display = if amount.contains('-') {
        number::truncated(&amount.replace('-', "")).map(|magnitude| format!("-{}", magnitude))
    } else {
        number::truncated(amount)
    };
    let display = display.unwrap_or_else(|| {
        ctx.fallback("amount", amount);
        amount.to_string()
    });

    let label = discount.label.as_deref().unwrap_or(DISCOUNT_LABEL);
    let line = ctx.config.layout.format_amount_line(label, &display);
    ctx.program.line(line);
}

fn emit_subtotal(ctx: &mut EmitContext<'_>, subtotal: &Subtotal) {
    let display = ctx.money("amount", &subtotal.amount);

    let label = subtotal.label.as_deref().unwrap_or(SUBTOTAL_LABEL);
    let line = ctx.config.layout.format_amount_line(label, &display);
    ctx.program.line(line).newline();
}

fn emit_total(ctx: &mut EmitContext<'_>, total: &Total) {
    let amount = total.amount.clone().unwrap_or_else(|| Scalar::from(0));
    let line = format!("TOTAL: {}", ctx.money("amount", &amount));
    let rule = ctx.config.rule_line();

    ctx.program
        .line(rule.as_str())
        .align(Alignment::Right)
        .line(line)
        .line(rule)
        .align(Alignment::Left);
}

fn emit_image(ctx: &mut EmitContext<'_>, image: &Image) {
    let converted = image.data.bytes().and_then(|bytes| {
        bitmap::convert(&bytes, ctx.config.image_width_limit(), ctx.config.dithering)
    });

    match converted {
        Ok(raster) => {
            ctx.program
                .align(Alignment::Center)
                .raster(raster)
                .align(Alignment::Left)
                .newline();
        }
        Err(e) => ctx.decode_failed(e.to_string()),
    }
}
