//! Print, render and test-print handlers.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::document::{Diagnostic, Document};
use crate::receipt;

use super::super::state::AppState;
use super::{ApiError, authorize};

/// Response header carrying the number of diagnostics from `/render`.
pub const WARNINGS_HEADER: &str = "x-comanda-warnings";

/// Body of `/print` and `/render`.
#[derive(Debug, Deserialize)]
pub struct PrintRequest {
    #[serde(flatten)]
    pub document: Document,
    /// Printer name; the server default when absent
    #[serde(default)]
    pub printer: Option<String>,
}

impl PrintRequest {
    fn parse(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid request: {}", e)))
    }
}

/// Handle POST /print
pub async fn print(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    authorize(&state, &headers)?;

    let PrintRequest { document, printer } = PrintRequest::parse(&body)?;
    if document.content.is_empty() {
        return Err(ApiError::BadRequest("Print content is required".to_string()));
    }

    run_job(state, document, printer, "Print job sent successfully").await
}

/// Handle POST /test-print
///
/// Failures keep the `success` flag: `{"success": false, "error": "..."}`.
pub async fn test_print(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    authorize(&state, &headers)?;
    run_job(state, receipt::test_receipt(), None, "Test print sent successfully!")
        .await
        .map_err(|e| e.with_success_flag())
}

/// Handle POST /render - compiled bytes, nothing printed.
pub async fn render(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    authorize(&state, &headers)?;

    let document = PrintRequest::parse(&body)?.document;
    let compiled = tokio::task::spawn_blocking(move || document.compile(&state.printer))
        .await
        .map_err(|e| ApiError::Internal(format!("Render task failed: {}", e)))?;

    let mut response = (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        compiled.bytes,
    )
        .into_response();
    response
        .headers_mut()
        .insert(WARNINGS_HEADER, HeaderValue::from(compiled.diagnostics.len()));
    Ok(response)
}

/// Compile and submit one job on the blocking pool.
async fn run_job(
    state: Arc<AppState>,
    document: Document,
    printer: Option<String>,
    message: &'static str,
) -> Result<Json<Value>, ApiError> {
    let job_id = Uuid::new_v4();
    let printer = printer.unwrap_or_else(|| state.config.default_printer.clone());
    let span = info_span!("print_job", %job_id, printer = %printer, variant = %document.variant);

    let result = {
        let span = span.clone();
        tokio::task::spawn_blocking(move || {
            let _enter = span.enter();
            let compiled = document.compile(&state.printer);
            state
                .spooler
                .submit(&printer, &compiled.bytes)
                .map(|_| compiled.diagnostics)
        })
    }
    .instrument(span.clone())
    .await
    .map_err(|e| ApiError::Internal(format!("Print task failed: {}", e)))?;

    let diagnostics: Vec<Diagnostic> = result?;
    span.in_scope(|| info!(warnings = diagnostics.len(), "print job sent"));

    Ok(Json(json!({
        "success": true,
        "message": message,
        "job_id": job_id.to_string(),
        "warnings": diagnostics,
    })))
}
