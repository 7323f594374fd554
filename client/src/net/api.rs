//! Submission to the relay service.
//!
//! Client-side (csr): a real `POST` via `gloo-net`.
//! Native builds only get the pure response interpretation, which is what the
//! tests exercise.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is folded into `kyc::SubmitError` so the wizard can return
//! to editing with a recoverable message instead of losing the form.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use kyc::SubmitError;
#[cfg(any(test, feature = "csr"))]
use kyc::payload::{SubmitAccepted, SubmitRejected};

/// Posts submission payloads to the relay endpoint.
#[derive(Clone, Debug)]
pub struct RelaySubmitter {
    endpoint: String,
}

impl RelaySubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl kyc::Submitter for RelaySubmitter {
    async fn submit(&self, payload: &kyc::SubmissionPayload) -> Result<(), SubmitError> {
        let request = gloo_net::http::Request::post(&self.endpoint)
            .json(payload)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| SubmitError::Response(e.to_string()))?;
        interpret_response(status, &body)
    }
}

#[cfg(any(test, feature = "csr"))]
/// Map a relay status and body onto the submission outcome.
fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Rejected { status, message: rejection_message(status, body) });
    }
    let accepted: SubmitAccepted = serde_json::from_str(body).map_err(|e| SubmitError::Response(e.to_string()))?;
    if accepted.success {
        Ok(())
    } else {
        Err(SubmitError::Response(accepted.message.unwrap_or_else(|| "relay reported failure".to_owned())))
    }
}

#[cfg(any(test, feature = "csr"))]
/// The relay's `{ "error": ... }` text, or a generic status line when the
/// body is not in that shape.
fn rejection_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<SubmitRejected>(body) {
        Ok(rejected) if !rejected.error.trim().is_empty() => rejected.error,
        _ => format!("request failed: {status}"),
    }
}
