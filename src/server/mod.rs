//! # HTTP Print Server
//!
//! Accepts receipt documents over HTTP, compiles them and hands the bytes to
//! a [`PrintSpooler`].
//!
//! ## Usage
//!
//! ```bash
//! comanda serve --listen 0.0.0.0:5000 --api-key secret --printer front=tcp://10.0.0.7
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Auth | Purpose |
//! |--------|------|------|---------|
//! | GET | `/` | no | Info page |
//! | GET | `/printers` | no | `{"printers": [...]}` |
//! | POST | `/print` | yes | Compile and print a document |
//! | POST | `/render` | yes | Compile only, bytes in the response |
//! | POST | `/test-print` | yes | Print the built-in test receipt |

mod handlers;
mod state;

pub use handlers::API_KEY_HEADER;
pub use handlers::print::{PrintRequest, WARNINGS_HEADER};
pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::error::ComandaError;
use crate::printer::PrinterConfig;
use crate::transport::PrintSpooler;

/// Request body cap; base64 logos make documents larger than axum's default.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/printers", get(handlers::printers::list))
        .route("/print", post(handlers::print::print))
        .route("/render", post(handlers::print::render))
        .route("/test-print", post(handlers::print::test_print))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl-C.
///
/// ```no_run
/// use std::sync::Arc;
/// use comanda::printer::PrinterConfig;
/// use comanda::server::{serve, ServerConfig};
/// use comanda::transport::PrinterRegistry;
///
/// # async fn example() -> Result<(), comanda::error::ComandaError> {
/// let registry = PrinterRegistry::from_specs(&["tcp://10.0.0.7"])?;
/// serve(ServerConfig::default(), Arc::new(registry), PrinterConfig::POS80).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(
    config: ServerConfig,
    spooler: Arc<dyn PrintSpooler>,
    printer: PrinterConfig,
) -> Result<(), ComandaError> {
    let listen_addr = config.listen_addr.clone();
    let printers = spooler.printer_names();
    let auth = config.api_key.is_some();
    let app = router(Arc::new(AppState::new(config, spooler, printer)));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| ComandaError::Config(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    info!(addr = %listen_addr, ?printers, auth, "comanda print server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ComandaError::Transport(format!("Server error: {}", e)))?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}
