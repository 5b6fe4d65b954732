//! # Comanda CLI
//!
//! Command-line interface for compiling and printing receipts.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP print server
//! comanda serve --printer front=tcp://10.0.0.7 --printer kitchen=/dev/usb/lp0
//!
//! # Compile a JSON document and inspect the bytes
//! comanda render order.json --output order.bin
//!
//! # Print a sample receipt
//! comanda print --sample customer --printer tcp://10.0.0.7
//!
//! # List sample receipts
//! comanda print
//! ```

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use comanda::{
    ComandaError, Document, PrinterConfig, Variant,
    receipt,
    render::dither::Dithering,
    server::{self, ServerConfig},
    transport::{PrinterRegistry, Target},
};

/// Comanda - ESC/POS receipt compiler and print server
#[derive(Parser, Debug)]
#[command(name = "comanda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP print server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:5000")]
        listen: String,

        /// Require this value in the X-API-KEY header
        #[arg(long, env = "COMANDA_API_KEY")]
        api_key: Option<String>,

        /// Printer as NAME=TARGET (repeatable); a bare TARGET becomes "default"
        #[arg(long = "printer", value_name = "NAME=TARGET", required = true)]
        printers: Vec<String>,

        /// Printer used when a request names none
        #[arg(long)]
        default_printer: Option<String>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Compile a document to ESC/POS bytes without printing
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Write bytes here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Compile a document and send it to a printer
    Print {
        #[command(flatten)]
        source: SourceArgs,

        /// tcp://host[:port], host:port, or a device path
        #[arg(long, env = "COMANDA_PRINTER", default_value = "/dev/usb/lp0")]
        printer: String,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Where the document comes from.
#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON document (omit to see available samples)
    file: Option<PathBuf>,

    /// Use a built-in sample receipt instead of a file
    #[arg(long, conflicts_with = "file")]
    sample: Option<String>,

    /// Override the document's variant (customer or kitchen)
    #[arg(long)]
    variant: Option<Variant>,
}

/// Rendering profile overrides.
#[derive(Args, Debug)]
struct RenderArgs {
    /// Currency marker before subtotal and total amounts
    #[arg(long)]
    currency: Option<String>,

    /// Widest image in dots; larger logos are scaled down (0 = paper width)
    #[arg(long)]
    max_image_width: Option<u32>,

    /// Image binarization: threshold or bayer
    #[arg(long, default_value = "threshold")]
    dither: Dithering,
}

impl RenderArgs {
    fn printer_config(&self) -> PrinterConfig {
        let mut config = PrinterConfig::POS80.with_dithering(self.dither);
        if let Some(currency) = &self.currency {
            config = config.with_currency(currency.clone());
        }
        if let Some(width) = self.max_image_width {
            config = config.with_max_image_width(width);
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ComandaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            api_key,
            printers,
            default_printer,
            render,
        } => {
            let mut registry = PrinterRegistry::from_specs(&printers)?;
            if let Some(name) = default_printer {
                registry.set_default(name);
            }

            let config = ServerConfig {
                listen_addr: listen,
                api_key,
                ..ServerConfig::default()
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config, Arc::new(registry), render.printer_config()))?;
        }

        Commands::Render {
            source,
            output,
            render,
        } => {
            let Some(document) = load_document(&source)? else {
                list_samples();
                return Ok(());
            };

            let compiled = document.compile(&render.printer_config());
            for diagnostic in &compiled.diagnostics {
                eprintln!("warning: {}", diagnostic);
            }

            match output {
                Some(path) => {
                    std::fs::write(&path, &compiled.bytes)?;
                    info!(path = %path.display(), bytes = compiled.bytes.len(), "wrote receipt");
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&compiled.bytes)?;
                    stdout.flush()?;
                }
            }
        }

        Commands::Print {
            source,
            printer,
            render,
        } => {
            let Some(document) = load_document(&source)? else {
                list_samples();
                return Ok(());
            };

            let target: Target = printer.parse()?;
            let compiled = document.compile(&render.printer_config());
            for diagnostic in &compiled.diagnostics {
                eprintln!("warning: {}", diagnostic);
            }

            println!("Printing to {}...", target);
            target.send(&compiled.bytes)?;
            println!("Printed successfully!");
        }
    }

    Ok(())
}

/// The document named by `source`, or `None` when it names nothing.
fn load_document(source: &SourceArgs) -> Result<Option<Document>, ComandaError> {
    let document = match (&source.sample, &source.file) {
        (Some(name), _) => receipt::by_name(name).ok_or_else(|| {
            ComandaError::Config(format!(
                "Unknown sample '{}'. Run without arguments to see available samples.",
                name
            ))
        })?,
        (None, Some(path)) => read_document(path)?,
        (None, None) => return Ok(None),
    };

    Ok(Some(match source.variant {
        Some(variant) => Document { variant, ..document },
        None => document,
    }))
}

fn read_document(path: &Path) -> Result<Document, ComandaError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn list_samples() {
    println!("Available samples:");
    for name in receipt::list_receipts() {
        println!("  {}", name);
    }
}
