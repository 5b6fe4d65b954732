//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for the ESC/POS command set understood by
//! generic 80mm thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, cut) and byte helpers
//! - [`text`]: Alignment, font, emphasis and character size
//! - [`graphics`]: Raster bit image (`GS v 0`)
//!
//! ## Usage Example
//!
//! ```
//! use comanda::protocol::{commands, text};
//! use comanda::protocol::text::Alignment;
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::emphasis_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::emphasis_off());
//! data.extend(commands::cut());
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! assert_eq!(&data[data.len() - 4..], &[0x1D, 0x56, 0x41, 0x03]);
//! ```
//!
//! Every builder returns a complete, self-contained sequence. Nothing here
//! reads back from the printer.

pub mod commands;
pub mod graphics;
pub mod text;
