//! Relay error type and its HTTP mapping.
//!
//! Every failure answers `500 {"error": "<message>"}`, matching the contract
//! the browser client already handles.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kyc::payload::SubmitRejected;

use crate::sheets::SheetError;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Webhook URL is not allowed")]
    WebhookNotAllowed,

    #[error("Failed to timestamp record: {0}")]
    Clock(String),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "submit-kyc failed");
        let body = SubmitRejected { error: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
