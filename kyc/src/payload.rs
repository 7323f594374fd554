//! Submission wire contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts a [`SubmissionPayload`] to the relay. The relay expands
//! it into a flat [`SheetRecord`] and forwards that to the spreadsheet
//! webhook named in the payload. Document bytes are never part of either
//! shape; only a passport-photo presence flag crosses the boundary.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::form::FormState;
use crate::slot::{FileSlots, SlotId};
use crate::solutions::SolutionsSelection;

// =============================================================================
// PAYLOAD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub company_name: String,
    pub company_website: String,
    pub company_email: String,
}

/// JSON body posted to the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub webhook_url: String,
    pub personal_info: PersonalInfo,
    pub organization: Organization,
    #[serde(default)]
    pub solutions: SolutionsSelection,
    #[serde(default)]
    pub has_passport_photo: bool,
}

impl SubmissionPayload {
    /// Shape the wizard's state into the wire payload.
    #[must_use]
    pub fn build(webhook_url: &str, form: &FormState, slots: &FileSlots, solutions: &SolutionsSelection) -> Self {
        Self {
            webhook_url: webhook_url.to_owned(),
            personal_info: PersonalInfo {
                name: form.name.clone(),
                email: form.email.clone(),
                phone: form.phone.clone(),
                address: form.address.clone(),
            },
            organization: Organization {
                company_name: form.company_name.clone(),
                company_website: form.company_website.clone(),
                company_email: form.company_email.clone(),
            },
            solutions: *solutions,
            has_passport_photo: slots.is_filled(SlotId::PassportPhoto),
        }
    }
}

// =============================================================================
// SHEET RECORD
// =============================================================================

/// Flattened row forwarded to the spreadsheet webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRecord {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
    pub company_website: String,
    pub company_email: String,
    /// Comma-joined labels of the selected solutions.
    pub solutions: String,
    /// `"Yes"` or `"No"`.
    pub has_passport_photo: String,
}

impl SheetRecord {
    #[must_use]
    pub fn from_payload(payload: &SubmissionPayload, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            name: payload.personal_info.name.clone(),
            email: payload.personal_info.email.clone(),
            phone: payload.personal_info.phone.clone(),
            address: payload.personal_info.address.clone(),
            company_name: payload.organization.company_name.clone(),
            company_website: payload.organization.company_website.clone(),
            company_email: payload.organization.company_email.clone(),
            solutions: payload.solutions.labels(),
            has_passport_photo: if payload.has_passport_photo { "Yes" } else { "No" }.to_owned(),
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Relay success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAccepted {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Relay failure body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRejected {
    pub error: String,
}

// =============================================================================
// SUBMITTER
// =============================================================================

/// Failure to hand a payload to the relay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The relay answered with a non-success status.
    #[error("submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The relay answered 2xx but the body was not understood.
    #[error("unexpected response: {0}")]
    Response(String),
}

/// Outbound seam for the submission boundary.
///
/// `?Send` because the browser implementation holds JS handles and runs on a
/// single-threaded executor.
#[async_trait::async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}
