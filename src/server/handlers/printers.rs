//! Printer listing.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use super::super::state::AppState;

/// Handle GET /printers
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "printers": state.spooler.printer_names() }))
}
