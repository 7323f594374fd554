//! Spreadsheet webhook client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each accepted submission becomes one [`SheetRecord`] POSTed as JSON to the
//! webhook URL the browser supplied (a Google Apps Script endpoint in
//! production). The relay never retries; a failed append surfaces to the
//! browser as a 500 and the user resubmits.

use std::time::Duration;

use kyc::SheetRecord;

use crate::config::WebhookTimeouts;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    #[error("failed to build webhook client: {0}")]
    HttpClientBuild(String),

    #[error("webhook request failed: {0}")]
    Request(String),

    #[error("Webhook failed: {status}")]
    Status { status: u16, body: String },
}

/// Destination for flattened KYC records. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SheetSink: Send + Sync {
    /// Append one record via `webhook_url`.
    ///
    /// # Errors
    ///
    /// Returns a [`SheetError`] if the request fails or the webhook answers
    /// with a non-2xx status.
    async fn append(&self, webhook_url: &str, record: &SheetRecord) -> Result<(), SheetError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct SheetsClient {
    http: reqwest::Client,
}

impl SheetsClient {
    /// # Errors
    ///
    /// Returns [`SheetError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(timeouts: WebhookTimeouts) -> Result<Self, SheetError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| SheetError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl SheetSink for SheetsClient {
    async fn append(&self, webhook_url: &str, record: &SheetRecord) -> Result<(), SheetError> {
        let response = self
            .http
            .post(webhook_url)
            .json(record)
            .send()
            .await
            .map_err(|e| SheetError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), %body, "sheet webhook rejected record");
        Err(SheetError::Status { status: status.as_u16(), body })
    }
}

#[cfg(test)]
#[path = "sheets_test.rs"]
mod tests;
