use super::*;

#[test]
fn missing_value_uses_fallback() {
    assert_eq!(non_empty_or(None, DEFAULT_RELAY_URL), "/api/submit-kyc");
}

#[test]
fn blank_value_uses_fallback() {
    assert_eq!(non_empty_or(Some("   "), DEFAULT_RELAY_URL), DEFAULT_RELAY_URL);
}

#[test]
fn set_value_is_trimmed() {
    assert_eq!(non_empty_or(Some(" https://relay.example/api/submit-kyc "), DEFAULT_RELAY_URL), "https://relay.example/api/submit-kyc");
}

#[test]
fn wizard_config_includes_solutions_step() {
    assert!(wizard_config().include_solutions);
}
