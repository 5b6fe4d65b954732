//! # Comanda - ESC/POS Receipt Compiler
//!
//! Comanda turns a list of receipt elements (headers, item lines, totals,
//! logos) into the exact byte stream an ESC/POS thermal printer consumes.
//! It provides:
//!
//! - **Document model**: typed elements that double as the JSON API
//! - **Compiler**: customer receipts and kitchen tickets from the same input
//! - **Bitmaps**: base64 logos converted to 1-bit raster commands
//! - **Transport**: raw TCP and character-device printers
//! - **Server**: an HTTP front end with API-key auth
//!
//! ## Quick Start
//!
//! ```
//! use comanda::document::{ContentElement, Document, Header, Item, Total, Variant};
//! use comanda::PrinterConfig;
//!
//! let doc = Document {
//!     content: vec![
//!         ContentElement::Header(Header { text: "CAFE".into() }),
//!         ContentElement::Item(Item::new("Tea", 2, 20)),
//!         ContentElement::Total(Total { amount: Some("40".into()) }),
//!     ],
//!     variant: Variant::Customer,
//! };
//!
//! let compiled = doc.compile(&PrinterConfig::POS80);
//! assert!(compiled.bytes.starts_with(&[0x1B, 0x40]));
//! assert!(compiled.diagnostics.is_empty());
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | Element types, input normalization, compiler |
//! | [`ir`] | Command program between compiler and bytes |
//! | [`protocol`] | ESC/POS command builders |
//! | [`layout`] | Fixed-width column formatting |
//! | [`render`] | Image decoding and dithering |
//! | [`printer`] | Printer profiles |
//! | [`transport`] | Communication backends and the printer registry |
//! | [`server`] | HTTP print server |
//! | [`receipt`] | Built-in sample receipts |
//! | [`error`] | Error types |

pub mod document;
pub mod error;
pub mod ir;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod render;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use document::{Compiled, Diagnostic, Document, Variant};
pub use error::ComandaError;
pub use printer::PrinterConfig;
