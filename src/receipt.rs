//! # Sample Receipts
//!
//! Built-in documents for smoke-testing a printer: the test receipt sent by
//! `POST /test-print`, and one demo of each variant.

use crate::document::{
    Address, ContentElement, Discount, Document, Header, Item, Phone, Scalar, Subtotal,
    TableHeader, TableRow, Text, Total, Variant,
};
use crate::protocol::text::Alignment;

/// Minimal receipt confirming the print path works end to end.
pub fn test_receipt() -> Document {
    Document {
        content: vec![
            ContentElement::Header(Header {
                text: "TEST RECEIPT".into(),
            }),
            ContentElement::Item(Item::new("Test Item", 1, 9.99)),
            ContentElement::Total(Total {
                amount: Some(Scalar::from(9.99)),
            }),
            ContentElement::Text(Text::new("Printer server is working!")),
        ],
        variant: Variant::Customer,
    }
}

/// A full customer receipt exercising every text element.
pub fn demo_customer() -> Document {
    let row = |cells: [&str; 5]| {
        ContentElement::TableRow(TableRow {
            columns: cells.iter().map(|c| Scalar::from(*c)).collect(),
        })
    };

    Document {
        content: vec![
            ContentElement::Header(Header {
                text: "DHANMONDI CAFE".into(),
            }),
            ContentElement::Address(Address {
                text: "House 12, Road 7, Dhanmondi, Dhaka".into(),
            }),
            ContentElement::Phone(Phone {
                text: "Tel: +880 1700-000000".into(),
            }),
            ContentElement::TableHeader(TableHeader {
                columns: ["SL", "Item", "Qty", "Rate", "Total"]
                    .iter()
                    .map(|c| Scalar::from(*c))
                    .collect(),
            }),
            row(["1", "Masala Tea", "2", "30.00", "60.00"]),
            row(["2", "Chicken Sandwich", "1", "180.50", "180.50"]),
            row(["3", "Lemon Soda", "3", "45", "135"]),
            ContentElement::Subtotal(Subtotal {
                label: None,
                amount: "375.50".into(),
            }),
            ContentElement::Discount(Discount {
                label: Some("Member discount".into()),
                amount: "-25".into(),
            }),
            ContentElement::Total(Total {
                amount: Some("350.50".into()),
            }),
            ContentElement::Text(Text::aligned("Paid by card", Alignment::Center)),
        ],
        variant: Variant::Customer,
    }
}

/// A kitchen ticket.
pub fn demo_kitchen() -> Document {
    Document {
        content: vec![
            ContentElement::Header(Header {
                text: "KITCHEN ORDER".into(),
            }),
            ContentElement::Text(Text::new("Table 7")),
            ContentElement::Text(Text::new("Order #42")),
            ContentElement::Item(Item::new("Beef Burger", 2, 350)),
            ContentElement::Item(Item::new("Fries", 1, 120)),
            ContentElement::Text(Text::new("No onions on burger 2")),
        ],
        variant: Variant::Kitchen,
    }
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// List available sample receipts
pub fn list_receipts() -> &'static [&'static str] {
    &["test", "customer", "kitchen"]
}

/// Get a sample receipt by name
pub fn by_name(name: &str) -> Option<Document> {
    match name.to_lowercase().as_str() {
        "test" => Some(test_receipt()),
        "customer" => Some(demo_customer()),
        "kitchen" => Some(demo_kitchen()),
        _ => None,
    }
}

/// Check if a name is a sample receipt
pub fn is_receipt(name: &str) -> bool {
    by_name(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::PrinterConfig;

    #[test]
    fn test_every_sample_compiles_cleanly() {
        for name in list_receipts() {
            let out = by_name(name).unwrap().compile(&PrinterConfig::POS80);
            assert!(out.bytes.starts_with(&[0x1B, 0x40]), "{}", name);
            assert!(out.bytes.ends_with(&[0x1D, 0x56, 0x41, 0x03]), "{}", name);
            assert!(out.diagnostics.is_empty(), "{}: {:?}", name, out.diagnostics);
        }
    }

    #[test]
    fn test_lookup() {
        assert!(is_receipt("TEST"));
        assert!(!is_receipt("nope"));
        assert_eq!(by_name("kitchen").unwrap().variant, Variant::Kitchen);
    }

    #[test]
    fn test_receipt_contents() {
        let bytes = test_receipt().build(&PrinterConfig::POS80);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("TEST RECEIPT"));
        assert!(text.contains("Test Item                  x    1      9         9"));
        assert!(text.contains("TOTAL: Tk.9"));
        assert!(text.contains("Printer server is working!"));
    }
}
