//! # Fixed-Width Text Layout
//!
//! Receipts are laid out on a grid of character cells. This module owns the
//! column geometry and the numeric display policy shared by every line kind.
//!
//! - [`table`]: column widths, justification, truncation, rules
//! - [`number`]: lenient number parsing and truncate-toward-zero display

pub mod number;
pub mod table;

pub use table::{COLUMN_WIDTHS, ColumnLayout, Justify};
