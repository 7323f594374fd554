use super::*;

#[test]
fn show_replaces_previous_notice() {
    let mut notices = NoticeState::default();
    let first = notices.show(NoticeKind::Success, "one", None);
    let second = notices.show(NoticeKind::Error, "two", None);

    assert_ne!(first, second);
    let current = notices.current().unwrap();
    assert_eq!(current.title, "two");
    assert_eq!(current.kind, NoticeKind::Error);
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut notices = NoticeState::default();
    let old = notices.show(NoticeKind::Success, "old", None);
    let new = notices.show(NoticeKind::Success, "new", None);

    assert!(!notices.dismiss(old));
    assert_eq!(notices.current().unwrap().title, "new");

    assert!(notices.dismiss(new));
    assert!(notices.current().is_none());
    assert!(!notices.dismiss(new));
}

#[test]
fn step_completed_names_next_step() {
    let mut notices = NoticeState::default();
    notices.step_completed(WizardStep::Documents);

    let current = notices.current().unwrap();
    assert_eq!(current.title, "Step completed!");
    assert_eq!(current.description.as_deref(), Some("Moving to KYC Documents"));
}

#[test]
fn invalid_documents_step_asks_for_documents() {
    let mut notices = NoticeState::default();
    notices.step_invalid(WizardStep::Documents);
    assert_eq!(notices.current().unwrap().title, "Please upload all required documents");

    notices.step_invalid(WizardStep::PersonalInfo);
    let current = notices.current().unwrap();
    assert_eq!(current.title, "Please fill all required fields");
    assert_eq!(current.description.as_deref(), Some("Check the form for errors"));
}

#[test]
fn submitted_notice_text() {
    let mut notices = NoticeState::default();
    notices.submitted();
    let current = notices.current().unwrap();
    assert_eq!(current.kind, NoticeKind::Success);
    assert_eq!(current.title, "KYC Submitted Successfully!");
    assert_eq!(current.description.as_deref(), Some("We'll review your documents shortly"));
}

#[test]
fn rejected_submission_surfaces_relay_message() {
    let err = SubmitError::Rejected { status: 500, message: "Webhook failed: 503".into() };
    assert_eq!(submit_failure_description(&err), "Webhook failed: 503");

    let mut notices = NoticeState::default();
    notices.submit_failed(&err);
    assert_eq!(notices.current().unwrap().kind, NoticeKind::Error);
}

#[test]
fn network_failure_hides_transport_detail() {
    let err = SubmitError::Network("TypeError: Failed to fetch".into());
    assert!(!submit_failure_description(&err).contains("TypeError"));
}
