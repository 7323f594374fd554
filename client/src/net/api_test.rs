use super::*;

#[test]
fn success_body_is_accepted() {
    let body = r#"{"success":true,"message":"KYC data sent to Google Sheets"}"#;
    assert_eq!(interpret_response(200, body), Ok(()));
}

#[test]
fn success_status_with_failure_flag_is_an_error() {
    let err = interpret_response(200, r#"{"success":false}"#).unwrap_err();
    assert!(matches!(err, SubmitError::Response(_)));
}

#[test]
fn success_status_with_garbage_body_is_an_error() {
    let err = interpret_response(200, "<html>ok</html>").unwrap_err();
    assert!(matches!(err, SubmitError::Response(_)));
}

#[test]
fn relay_error_body_becomes_rejection_message() {
    let err = interpret_response(500, r#"{"error":"Webhook failed: 503"}"#).unwrap_err();
    assert_eq!(err, SubmitError::Rejected { status: 500, message: "Webhook failed: 503".into() });
}

#[test]
fn unstructured_error_body_falls_back_to_status() {
    assert_eq!(rejection_message(502, "Bad Gateway"), "request failed: 502");
    assert_eq!(rejection_message(500, r#"{"error":"  "}"#), "request failed: 500");
}

#[test]
fn submitter_keeps_endpoint() {
    let submitter = RelaySubmitter::new(crate::config::DEFAULT_RELAY_URL);
    assert_eq!(submitter.endpoint(), "/api/submit-kyc");
}
