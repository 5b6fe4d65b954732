//! Byte-exact receipt output, checked against the ESC/POS command table.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use comanda::document::*;
use comanda::printer::PrinterConfig;
use comanda::protocol::text::Alignment;
use pretty_assertions::assert_eq;

const INIT: &[u8] = &[0x1B, 0x40];
const LEFT: &[u8] = &[0x1B, 0x61, 0x00];
const CENTER: &[u8] = &[0x1B, 0x61, 0x01];
const RIGHT: &[u8] = &[0x1B, 0x61, 0x02];
const BOLD_ON: &[u8] = &[0x1B, 0x45, 0x01];
const BOLD_OFF: &[u8] = &[0x1B, 0x45, 0x00];
const SMALL: &[u8] = &[0x1B, 0x4D, 0x01];
const NORMAL_FONT: &[u8] = &[0x1B, 0x4D, 0x00];
const NORMAL_SIZE: &[u8] = &[0x1B, 0x21, 0x00];
const QUAD: &[u8] = &[0x1B, 0x21, 0x38];
const CUT: &[u8] = &[0x1D, 0x56, 0x41, 0x03];
const LF: &[u8] = b"\n";

const RULE: &str = "---------------------------------------------";

fn line(text: &str) -> Vec<u8> {
    let mut out = text.as_bytes().to_vec();
    out.push(b'\n');
    out
}

fn join(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

fn customer_footer() -> Vec<u8> {
    join(&[CENTER, LF, &line("Thank you for your purchase!"), LF, CUT])
}

fn compile_customer(content: Vec<ContentElement>) -> Compiled {
    Document {
        content,
        variant: Variant::Customer,
    }
    .compile(&PrinterConfig::POS80)
}

fn scalars(cells: &[&str]) -> Vec<Scalar> {
    cells.iter().map(|c| Scalar::from(*c)).collect()
}

fn png(width: u32, height: u32, pixel: impl Fn(u32, u32) -> image::Rgba<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, pixel);
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn test_full_customer_receipt() {
    let compiled = compile_customer(vec![
        ContentElement::Header(Header { text: "CAFE".into() }),
        ContentElement::Address(Address {
            text: "Road 1".into(),
        }),
        ContentElement::Phone(Phone {
            text: "0171".into(),
        }),
        ContentElement::TableHeader(TableHeader {
            columns: scalars(&["SL", "Item", "Qty", "Rate", "Total"]),
        }),
        ContentElement::TableRow(TableRow {
            columns: scalars(&["1", "Tea", "2", "30.50", "61"]),
        }),
        ContentElement::TableRow(TableRow {
            columns: scalars(&["2", "Cake", "1", "80", "80"]),
        }),
        ContentElement::Item(Item::new("Cola", 2, 5.5)),
        ContentElement::Discount(Discount {
            label: None,
            amount: "-25.5".into(),
        }),
        ContentElement::Subtotal(Subtotal {
            label: None,
            amount: "100".into(),
        }),
        ContentElement::Total(Total {
            amount: Some("75".into()),
        }),
        ContentElement::Text(Text::aligned("Bye", Alignment::Center)),
    ]);

    let expected = join(&[
        INIT,
        // header
        CENTER,
        BOLD_ON,
        &line("CAFE"),
        BOLD_OFF,
        LEFT,
        // address, phone
        SMALL,
        LEFT,
        &line("Road 1"),
        NORMAL_FONT,
        SMALL,
        LEFT,
        &line("0171"),
        NORMAL_FONT,
        LF,
        // table: one rule after the header, one after the last row
        LEFT,
        &line("SL   Item                    Qty Rate   Total"),
        &line(RULE),
        LEFT,
        &line("1    Tea                       2   30      61"),
        LEFT,
        &line("2    Cake                      1   80      80"),
        &line(RULE),
        // item, discount, subtotal
        &line("Cola                       x    2      5        10"),
        &line("Discount                                  -25"),
        &line("Sub-total                              Tk.100"),
        LF,
        // total
        &line(RULE),
        RIGHT,
        &line("TOTAL: Tk.75"),
        &line(RULE),
        LEFT,
        // text
        CENTER,
        &line("Bye"),
        LEFT,
        &customer_footer(),
    ]);

    assert_eq!(compiled.bytes, expected);
    assert!(compiled.diagnostics.is_empty());
}

#[test]
fn test_kitchen_ticket() {
    let doc: Document = serde_json::from_str(
        r#"{
            "print_type": "KITCHEN",
            "content": [
                {"type": "header", "text": "ORDER 12"},
                {"type": "text", "text": "Table 3"},
                {"type": "text", "text": "no salt"},
                {"type": "item", "text": "Burger", "quantity": "2.7"},
                {"type": "total", "amount": 900},
                {"type": "image", "data": "AAAA"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(doc.variant, Variant::Kitchen);

    let compiled = doc.compile(&PrinterConfig::POS80);
    let expected = join(&[
        INIT,
        CENTER,
        BOLD_ON,
        &line("ORDER 12"),
        BOLD_OFF,
        LEFT,
        LEFT,
        QUAD,
        &line("Table 3"),
        NORMAL_SIZE,
        LEFT,
        LEFT,
        NORMAL_SIZE,
        &line("no salt"),
        LEFT,
        QUAD,
        &line("Burger 2"),
        NORMAL_SIZE,
        LF,
        CUT,
    ]);

    assert_eq!(compiled.bytes, expected);
    // Images are not printed on kitchen tickets, so nothing was decoded
    assert!(compiled.diagnostics.is_empty());
}

#[test]
fn test_empty_receipts_are_framed() {
    assert_eq!(
        compile_customer(vec![]).bytes,
        join(&[INIT, &customer_footer()])
    );

    let kitchen = Document::new(Variant::Kitchen).build(&PrinterConfig::POS80);
    assert_eq!(kitchen, join(&[INIT, LF, CUT]));
}

#[test]
fn test_unparseable_numbers_are_printed_verbatim() {
    let compiled = compile_customer(vec![
        ContentElement::Item(Item::new("Soup", "abc", "3")),
        ContentElement::Total(Total {
            amount: Some("n/a".into()),
        }),
    ]);

    let expected = join(&[
        INIT,
        &line("Soup                       x  abc      3          "),
        &line(RULE),
        RIGHT,
        &line("TOTAL: n/a"),
        &line(RULE),
        LEFT,
        &customer_footer(),
    ]);
    assert_eq!(compiled.bytes, expected);
    assert_eq!(
        compiled.diagnostics,
        vec![
            Diagnostic::FormatFallback {
                index: 0,
                field: "quantity",
                value: "abc".into(),
            },
            Diagnostic::FormatFallback {
                index: 1,
                field: "amount",
                value: "n/a".into(),
            },
        ]
    );
}

#[test]
fn test_unparseable_subtotal_has_no_currency() {
    let doc: Document =
        serde_json::from_str(r#"{"content": [{"type": "subtotal", "amount": "N/A"}]}"#).unwrap();
    let compiled = doc.compile(&PrinterConfig::POS80);

    let expected = join(&[
        INIT,
        &line("Sub-total                                 N/A"),
        LF,
        &customer_footer(),
    ]);
    assert_eq!(compiled.bytes, expected);
    assert_eq!(
        compiled.diagnostics,
        vec![Diagnostic::FormatFallback {
            index: 0,
            field: "amount",
            value: "N/A".into(),
        }]
    );
}

#[test]
fn test_undecodable_image_is_skipped() {
    let header = ContentElement::Header(Header { text: "CAFE".into() });
    let total = ContentElement::Total(Total {
        amount: Some("10".into()),
    });
    let broken = ContentElement::Image(Image {
        data: ImagePayload::Encoded("definitely not an image".into()),
    });

    let without = compile_customer(vec![header.clone(), total.clone()]);
    let with = compile_customer(vec![header, broken, total]);

    assert_eq!(with.bytes, without.bytes);
    assert_eq!(with.diagnostics.len(), 1);
    assert!(matches!(
        with.diagnostics[0],
        Diagnostic::Decode { index: 1, .. }
    ));
}

#[test]
fn test_image_raster_bytes() {
    // 10x2: top row black, bottom row white
    let png = png(10, 2, |_, y| {
        if y == 0 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    });
    let payload = format!("data:image/png;base64,{}", STANDARD.encode(&png));

    let compiled = compile_customer(vec![ContentElement::Image(Image {
        data: ImagePayload::Encoded(payload),
    })]);

    let expected = join(&[
        INIT,
        CENTER,
        &[0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x02, 0x00],
        &[0xFF, 0xC0, 0x00, 0x00],
        LEFT,
        LF,
        &customer_footer(),
    ]);
    assert_eq!(compiled.bytes, expected);
    assert!(compiled.diagnostics.is_empty());
}

#[test]
fn test_transparent_image_prints_white() {
    let png = png(8, 1, |_, _| image::Rgba([0, 0, 0, 0]));

    let compiled = compile_customer(vec![ContentElement::Image(Image {
        data: ImagePayload::Bytes(png),
    })]);

    let expected = join(&[
        INIT,
        CENTER,
        &[0x1D, 0x76, 0x30, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00],
        LEFT,
        LF,
        &customer_footer(),
    ]);
    assert_eq!(compiled.bytes, expected);
}

#[test]
fn test_wide_image_is_capped() {
    let png = png(624, 20, |_, _| image::Rgba([0, 0, 0, 255]));
    let compiled = compile_customer(vec![ContentElement::Image(Image {
        data: ImagePayload::Bytes(png),
    })]);

    // 312 dots = 39 bytes per line, 20 * 312 / 624 = 10 rows
    let header = &compiled.bytes[INIT.len() + CENTER.len()..][..8];
    assert_eq!(header, &[0x1D, 0x76, 0x30, 0x00, 39, 0x00, 10, 0x00]);
}

#[test]
fn test_uncapped_image_is_clamped_to_paper_width() {
    let png = png(1152, 4, |_, _| image::Rgba([0, 0, 0, 255]));
    let doc = Document {
        content: vec![ContentElement::Image(Image {
            data: ImagePayload::Bytes(png),
        })],
        variant: Variant::Customer,
    };
    let bytes = doc.build(&PrinterConfig::POS80.with_max_image_width(0));

    // 576 dots = 72 bytes per line, 4 * 576 / 1152 = 2 rows
    let header = &bytes[INIT.len() + CENTER.len()..][..8];
    assert_eq!(header, &[0x1D, 0x76, 0x30, 0x00, 72, 0x00, 2, 0x00]);
}

#[test]
fn test_loose_json_matches_typed_elements() {
    let loose: Document = serde_json::from_str(
        r#"{"content": [
            {"type": "header", "text": "CAFE"},
            {"name": "Tea", "quantity": 2, "price": "20"},
            {"text": "hello"},
            {"type": "mystery", "value": 1},
            {"name": "Ghost", "quantity": 0},
            {"type": "discount"},
            {"type": "table_row", "columns": ["1", "Tea", 2, 20.5, 41]}
        ]}"#,
    )
    .unwrap();

    let typed = Document {
        content: vec![
            ContentElement::Header(Header { text: "CAFE".into() }),
            ContentElement::Item(Item::new("Tea", 2, "20")),
            ContentElement::Text(Text::new("hello")),
            ContentElement::Discount(Discount::default()),
            ContentElement::TableRow(TableRow {
                columns: scalars(&["1", "Tea", "2", "20.5", "41"]),
            }),
        ],
        variant: Variant::Customer,
    };

    assert_eq!(loose.content, typed.content);
    assert_eq!(
        loose.build(&PrinterConfig::POS80),
        typed.build(&PrinterConfig::POS80)
    );
}

#[test]
fn test_output_is_deterministic() {
    let doc = comanda::receipt::demo_customer();
    let config = PrinterConfig::POS80;
    assert_eq!(doc.build(&config), doc.build(&config));
}

#[test]
fn test_single_init_and_cut() {
    for name in comanda::receipt::list_receipts() {
        let bytes = comanda::receipt::by_name(name)
            .unwrap()
            .build(&PrinterConfig::POS80);
        let inits = bytes.windows(2).filter(|w| *w == INIT).count();
        let cuts = bytes.windows(4).filter(|w| *w == CUT).count();
        assert_eq!((inits, cuts), (1, 1), "{}", name);
        assert!(bytes.ends_with(CUT), "{}", name);
    }
}
