//! HTTP handlers for the server.

pub mod index;
pub mod print;
pub mod printers;

use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::ComandaError;

use super::state::AppState;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Error response: `{"error": "..."}` with a matching status.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    NotFound(String),
    Internal(String),
    /// Job failure reported as `{"success": false, "error": "..."}`
    JobFailed(StatusCode, String),
}

impl ApiError {
    fn into_parts(self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
            ApiError::JobFailed(status, m) => (status, m),
        }
    }

    /// Same status and message, with `"success": false` in the body.
    pub fn with_success_flag(self) -> Self {
        let (status, message) = self.into_parts();
        ApiError::JobFailed(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let flagged = matches!(self, ApiError::JobFailed(..));
        let (status, message) = self.into_parts();
        let body = if flagged {
            json!({ "success": false, "error": message })
        } else {
            json!({ "error": message })
        };
        (status, Json(body)).into_response()
    }
}

impl From<ComandaError> for ApiError {
    fn from(e: ComandaError) -> Self {
        match e {
            ComandaError::UnknownPrinter(_) => ApiError::NotFound(e.to_string()),
            ComandaError::Json(_) => ApiError::BadRequest(e.to_string()),
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

/// Reject the request unless it carries the configured API key.
pub(crate) fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if state.authorized(presented) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}
