//! # Printer Transport Layer
//!
//! Delivers compiled bytes to physical printers. Writes are fire-and-forget:
//! nothing is ever read back from a printer.
//!
//! ## Available Transports
//!
//! - [`device`]: Character devices (USB, serial, RFCOMM)
//! - [`network`]: Raw TCP, port 9100
//!
//! [`registry`] maps printer names to targets and serializes jobs per
//! printer, since a device accepts one job at a time.

pub mod device;
pub mod network;
pub mod registry;

pub use device::DeviceTransport;
pub use network::NetworkTransport;
pub use registry::{DEFAULT_PRINTER, PrintSpooler, PrinterRegistry};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ComandaError;

/// Something raw printer bytes can be written to.
pub trait Transport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), ComandaError>;
}

/// Where a printer lives.
///
/// | Spec | Target |
/// |------|--------|
/// | `tcp://10.0.0.5` | `Network("10.0.0.5:9100")` |
/// | `10.0.0.5:9100` | `Network("10.0.0.5:9100")` |
/// | `/dev/usb/lp0` | `Device("/dev/usb/lp0")` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Device(PathBuf),
    Network(String),
}

impl Target {
    /// Open a fresh connection to the target.
    pub fn open(&self) -> Result<Box<dyn Transport>, ComandaError> {
        match self {
            Target::Device(path) => Ok(Box::new(DeviceTransport::open(path)?)),
            Target::Network(addr) => Ok(Box::new(NetworkTransport::connect(addr)?)),
        }
    }

    /// Open the target and write one job.
    pub fn send(&self, data: &[u8]) -> Result<(), ComandaError> {
        self.open()?.write_all(data)
    }
}

impl FromStr for Target {
    type Err = ComandaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ComandaError::Config("empty printer target".into()));
        }

        if let Some(rest) = s.strip_prefix("tcp://") {
            return Ok(Target::Network(with_default_port(rest)));
        }

        if !s.starts_with('/') && !s.starts_with('.') && has_port(s) {
            return Ok(Target::Network(s.to_string()));
        }

        Ok(Target::Device(PathBuf::from(s)))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Device(path) => write!(f, "{}", path.display()),
            Target::Network(addr) => write!(f, "tcp://{}", addr),
        }
    }
}

fn has_port(addr: &str) -> bool {
    addr.rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
}

fn with_default_port(addr: &str) -> String {
    if has_port(addr) {
        addr.to_string()
    } else {
        format!("{}:{}", addr, network::DEFAULT_PORT)
    }
}
