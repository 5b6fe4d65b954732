//! # Printer Module
//!
//! Printer profiles used by the receipt compiler.
//!
//! - [`config`]: Rendering constants per printer profile

pub mod config;

pub use config::PrinterConfig;
