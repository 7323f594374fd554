//! `POST /api/submit-kyc`: validate, flatten, forward.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use kyc::payload::SubmitAccepted;
use kyc::{SheetRecord, SubmissionPayload};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::RelayError;
use crate::state::AppState;

pub const FORWARDED_MESSAGE: &str = "KYC data sent to Google Sheets";

/// The body is taken raw so that malformed JSON yields the same
/// `500 {error}` shape as every other failure instead of Axum's rejection.
pub async fn submit_kyc(State(state): State<AppState>, body: Bytes) -> Result<Json<SubmitAccepted>, RelayError> {
    let payload: SubmissionPayload =
        serde_json::from_slice(&body).map_err(|e| RelayError::MalformedBody(e.to_string()))?;

    if !state.webhooks.permits(&payload.webhook_url) {
        tracing::warn!(webhook_url = %payload.webhook_url, "webhook URL rejected by allow-list");
        return Err(RelayError::WebhookNotAllowed);
    }

    let record = SheetRecord::from_payload(&payload, timestamp(OffsetDateTime::now_utc())?);
    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        %request_id,
        solutions = %record.solutions,
        has_passport_photo = %record.has_passport_photo,
        "forwarding KYC record"
    );

    state.sheets.append(&payload.webhook_url, &record).await?;

    tracing::info!(%request_id, "KYC record forwarded");
    Ok(Json(SubmitAccepted { success: true, message: Some(FORWARDED_MESSAGE.to_owned()) }))
}

/// UTC timestamp with millisecond precision, e.g. `2024-03-05T07:08:09.123Z`.
fn timestamp(at: OffsetDateTime) -> Result<String, RelayError> {
    at.to_offset(time::UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
        .map_err(|e| RelayError::Clock(e.to_string()))
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
