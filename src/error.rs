//! # Error Types
//!
//! Errors used throughout the comanda library. Compilation itself never
//! fails; per-element problems surface as [`crate::document::Diagnostic`]s.

use thiserror::Error;

/// Main error type for comanda operations
#[derive(Debug, Error)]
pub enum ComandaError {
    /// Transport-level errors (connection, device I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid configuration (bad printer spec, bad listen address)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No printer registered under this name
    #[error("Unknown printer: {0}")]
    UnknownPrinter(String),

    /// Malformed JSON document
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an image element could not be turned into a raster command.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("undecodable image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels")]
    Empty,

    #[error("image too large for a raster command ({width}x{height})")]
    TooLarge { width: u32, height: u32 },
}
