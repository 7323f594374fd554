//! Transient toast-style notices.
//!
//! DESIGN
//! ======
//! Only one notice is visible at a time; showing a new one replaces the old.
//! Every notice carries a sequence number so that a delayed auto-dismiss
//! scheduled for an older notice cannot hide a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use kyc::{SubmitError, WizardStep};

/// How long a notice stays up before auto-dismissing.
pub const NOTICE_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replace the visible notice and return its sequence number.
    pub fn show(&mut self, kind: NoticeKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notice { seq, kind, title: title.into(), description });
        seq
    }

    /// Hide the notice only if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn step_completed(&mut self, next: WizardStep) -> u64 {
        self.show(NoticeKind::Success, "Step completed!", Some(format!("Moving to {}", next.title())))
    }

    /// The current step failed validation on Next or Submit.
    pub fn step_invalid(&mut self, step: WizardStep) -> u64 {
        match step {
            WizardStep::Documents => self.show(NoticeKind::Error, "Please upload all required documents", None),
            _ => self.show(
                NoticeKind::Error,
                "Please fill all required fields",
                Some("Check the form for errors".to_owned()),
            ),
        }
    }

    pub fn submitted(&mut self) -> u64 {
        self.show(
            NoticeKind::Success,
            "KYC Submitted Successfully!",
            Some("We'll review your documents shortly".to_owned()),
        )
    }

    pub fn submit_failed(&mut self, err: &SubmitError) -> u64 {
        self.show(NoticeKind::Error, "Submission failed", Some(submit_failure_description(err)))
    }
}

/// User-facing explanation of a failed submission.
pub fn submit_failure_description(err: &SubmitError) -> String {
    match err {
        SubmitError::Network(_) => "Could not reach the server. Please try again.".to_owned(),
        SubmitError::Rejected { message, .. } => message.clone(),
        SubmitError::Response(_) => "The server sent an unexpected response. Please try again.".to_owned(),
    }
}
