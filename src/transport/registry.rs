//! # Printer Registry
//!
//! Named printers, each behind its own lock so concurrent requests for the
//! same device queue up instead of interleaving bytes on the wire. Jobs for
//! different printers run in parallel.

use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::{info, warn};

use super::Target;
use crate::error::ComandaError;

/// Name that resolves to the registry's default printer.
pub const DEFAULT_PRINTER: &str = "default";

/// The two capabilities the print server needs from a spooler.
pub trait PrintSpooler: Send + Sync {
    /// Names of the available printers.
    fn printer_names(&self) -> Vec<String>;

    /// Write one complete job to the named printer. Blocks until done.
    fn submit(&self, printer: &str, data: &[u8]) -> Result<(), ComandaError>;
}

struct Printer {
    target: Target,
    lock: Mutex<()>,
}

/// Printers by name.
///
/// ```
/// use comanda::transport::{PrinterRegistry, PrintSpooler};
///
/// let registry = PrinterRegistry::from_specs(&["bar=tcp://10.0.0.7", "kitchen=/dev/usb/lp0"])?;
/// assert_eq!(registry.printer_names(), vec!["bar", "kitchen"]);
/// # Ok::<(), comanda::error::ComandaError>(())
/// ```
#[derive(Default)]
pub struct PrinterRegistry {
    printers: BTreeMap<String, Printer>,
    default: Option<String>,
}

impl PrinterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `NAME=TARGET` specs. A bare `TARGET` registers as `default`.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, ComandaError> {
        let mut registry = Self::new();
        for spec in specs {
            let spec = spec.as_ref();
            let (name, target) = match spec.split_once('=') {
                Some((name, target)) => (name.trim(), target),
                None => (DEFAULT_PRINTER, spec),
            };
            if name.is_empty() {
                return Err(ComandaError::Config(format!("printer spec '{}' has no name", spec)));
            }
            registry.register(name, target.parse()?);
        }
        Ok(registry)
    }

    /// Add or replace a printer.
    pub fn register(&mut self, name: impl Into<String>, target: Target) -> &mut Self {
        self.printers.insert(
            name.into(),
            Printer {
                target,
                lock: Mutex::new(()),
            },
        );
        self
    }

    /// Printer that `default` resolves to.
    pub fn set_default(&mut self, name: impl Into<String>) -> &mut Self {
        self.default = Some(name.into());
        self
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.resolve(name).ok().map(|(_, printer)| &printer.target)
    }

    /// `default` resolves to the configured default, then to a printer
    /// literally named `default`, then to the first printer by name.
    fn resolve<'a>(&'a self, name: &str) -> Result<(&'a str, &'a Printer), ComandaError> {
        if name == DEFAULT_PRINTER {
            let chosen = self
                .default
                .as_deref()
                .and_then(|d| self.printers.get_key_value(d))
                .or_else(|| self.printers.get_key_value(DEFAULT_PRINTER))
                .or_else(|| self.printers.iter().next());
            return chosen
                .map(|(n, p)| (n.as_str(), p))
                .ok_or_else(|| ComandaError::UnknownPrinter("no printers configured".into()));
        }

        self.printers
            .get_key_value(name)
            .map(|(n, p)| (n.as_str(), p))
            .ok_or_else(|| ComandaError::UnknownPrinter(name.to_string()))
    }
}

impl PrintSpooler for PrinterRegistry {
    fn printer_names(&self) -> Vec<String> {
        self.printers.keys().cloned().collect()
    }

    fn submit(&self, printer: &str, data: &[u8]) -> Result<(), ComandaError> {
        let (name, printer) = self.resolve(printer)?;

        // A panic mid-write leaves nothing to protect, so poisoning is ignored
        let _guard = printer.lock.lock().unwrap_or_else(|e| e.into_inner());

        info!(printer = name, target = %printer.target, bytes = data.len(), "sending job");
        printer.target.send(data).inspect_err(|e| {
            warn!(printer = name, error = %e, "print job failed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::thread;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("comanda-{}-{}", name, std::process::id()));
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_from_specs() {
        let registry = PrinterRegistry::from_specs(&["front=tcp://10.0.0.2", "/dev/usb/lp0"]).unwrap();
        assert_eq!(registry.printer_names(), vec!["default", "front"]);
        assert_eq!(
            registry.target("front"),
            Some(&Target::Network("10.0.0.2:9100".into()))
        );
        assert_eq!(
            registry.target(DEFAULT_PRINTER),
            Some(&Target::Device("/dev/usb/lp0".into()))
        );
    }

    #[test]
    fn test_bad_spec() {
        assert!(PrinterRegistry::from_specs(&["=/dev/lp0"]).is_err());
    }

    #[test]
    fn test_default_resolution() {
        let mut registry = PrinterRegistry::new();
        registry
            .register("bar", Target::Device("/dev/lp1".into()))
            .register("kitchen", Target::Device("/dev/lp2".into()));
        assert_eq!(
            registry.target(DEFAULT_PRINTER),
            Some(&Target::Device("/dev/lp1".into()))
        );

        registry.set_default("kitchen");
        assert_eq!(
            registry.target(DEFAULT_PRINTER),
            Some(&Target::Device("/dev/lp2".into()))
        );
    }

    #[test]
    fn test_unknown_printer() {
        let registry = PrinterRegistry::new();
        assert!(matches!(
            registry.submit("nope", b"x"),
            Err(ComandaError::UnknownPrinter(_))
        ));
        assert!(matches!(
            registry.submit(DEFAULT_PRINTER, b"x"),
            Err(ComandaError::UnknownPrinter(_))
        ));
    }

    #[test]
    fn test_concurrent_jobs_do_not_interleave() {
        let path = scratch("registry-concurrent");
        let mut registry = PrinterRegistry::new();
        registry.register("lp", Target::Device(path.clone()));
        let registry = Arc::new(registry);

        // Each job is written through a fresh handle; without the lock the
        // writes would race on the same file offset
        let jobs: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 10_000]).collect();
        let handles: Vec<_> = jobs
            .iter()
            .cloned()
            .map(|job| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.submit("lp", &job).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Opening without truncation overwrites from offset 0, so the file
        // holds exactly one whole job
        let written = fs::read(&path).unwrap();
        assert_eq!(written.len(), 10_000);
        assert!(written.iter().all(|&b| b == written[0]));
        fs::remove_file(path).ok();
    }
}
