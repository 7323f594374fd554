use super::*;

#[test]
fn permission_refusals_map_to_permission_denied() {
    assert_eq!(classify_dom_error("NotAllowedError", "Permission denied"), CameraError::PermissionDenied);
    assert_eq!(classify_dom_error("SecurityError", ""), CameraError::PermissionDenied);
}

#[test]
fn missing_devices_map_to_not_found() {
    assert_eq!(classify_dom_error("NotFoundError", "Requested device not found"), CameraError::NotFound);
    assert_eq!(classify_dom_error("OverconstrainedError", ""), CameraError::NotFound);
}

#[test]
fn other_failures_keep_their_detail() {
    assert_eq!(
        classify_dom_error("NotReadableError", "Could not start video source"),
        CameraError::Unavailable("NotReadableError: Could not start video source".into())
    );
    assert_eq!(classify_dom_error("AbortError", ""), CameraError::Unavailable("AbortError".into()));
}

#[test]
fn every_acquisition_failure_shows_the_permission_prompt_text() {
    for name in ["NotAllowedError", "NotFoundError", "NotReadableError"] {
        assert_eq!(classify_dom_error(name, "").user_message(), kyc::camera::ACCESS_DENIED_MESSAGE);
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn detached_stream_never_yields_frames() {
    use kyc::MediaStream as _;

    let stream = DetachedStream;
    stream.stop();
    assert_eq!(stream.capture_frame(), Err(CameraError::NotActive));
}
