//! Build-time client configuration.
//!
//! Both values are baked in at compile time (`option_env!`) because a static
//! WASM bundle has no process environment to read at runtime.

use kyc::WizardConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Relay endpoint used when `KYC_RELAY_URL` is unset or empty.
pub const DEFAULT_RELAY_URL: &str = "/api/submit-kyc";

/// Where submissions are POSTed.
pub fn relay_url() -> &'static str {
    non_empty_or(option_env!("KYC_RELAY_URL"), DEFAULT_RELAY_URL)
}

/// Downstream sheet webhook forwarded inside each payload.
pub fn webhook_url() -> &'static str {
    non_empty_or(option_env!("KYC_WEBHOOK_URL"), "")
}

pub fn wizard_config() -> WizardConfig {
    WizardConfig::new(webhook_url())
}

fn non_empty_or(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback)
}
