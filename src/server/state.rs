//! Server state and configuration.

use std::sync::Arc;

use crate::printer::PrinterConfig;
use crate::transport::{DEFAULT_PRINTER, PrintSpooler};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:5000")
    pub listen_addr: String,
    /// Required `X-API-KEY` value; `None` disables authorization
    pub api_key: Option<String>,
    /// Printer used when a request names none
    pub default_printer: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            api_key: None,
            default_printer: DEFAULT_PRINTER.to_string(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub spooler: Arc<dyn PrintSpooler>,
    /// Rendering profile used for every job
    pub printer: PrinterConfig,
}

impl AppState {
    pub fn new(config: ServerConfig, spooler: Arc<dyn PrintSpooler>, printer: PrinterConfig) -> Self {
        Self {
            config,
            spooler,
            printer,
        }
    }

    /// Whether the request's API key is acceptable.
    pub fn authorized(&self, presented: Option<&str>) -> bool {
        match &self.config.api_key {
            None => true,
            Some(expected) => presented == Some(expected.as_str()),
        }
    }
}
