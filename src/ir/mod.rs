//! # Command Emitter
//!
//! A small "bytecode" between receipt elements and raw ESC/POS bytes.
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────┐
//! │   Elements   │ ──► │     IR      │ ──► │ Codegen  │
//! │ (semantic)   │     │  (Vec<Op>)  │     │ (bytes)  │
//! └──────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! Every op is self-contained: a style op fully specifies the mode it sets
//! and is never diffed against earlier ops. Reordering or dropping one
//! element therefore cannot leave a stale mode behind for the next.
//!
//! ## Example
//!
//! ```
//! use comanda::ir::Program;
//! use comanda::protocol::text::Alignment;
//!
//! let mut program = Program::new();
//! program
//!     .init()
//!     .align(Alignment::Center)
//!     .emphasis(true)
//!     .line("HELLO")
//!     .emphasis(false)
//!     .cut();
//!
//! let bytes = program.to_bytes();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod codegen;
mod ops;

pub use ops::*;
