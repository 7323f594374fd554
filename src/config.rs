//! Relay configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub port: u16,
    pub timeouts: WebhookTimeouts,
    /// When non-empty, payload webhook URLs must start with one of these.
    pub allowed_webhook_prefixes: Vec<String>,
    /// Built client to serve as the fallback route.
    pub site_dir: Option<PathBuf>,
}

impl RelayConfig {
    /// Build typed relay config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `KYC_WEBHOOK_REQUEST_TIMEOUT_SECS`: default 30
    /// - `KYC_WEBHOOK_CONNECT_TIMEOUT_SECS`: default 10
    /// - `KYC_ALLOWED_WEBHOOK_PREFIXES`: comma-separated URL prefixes
    /// - `KYC_SITE_DIR`: directory holding the built client
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] against an arbitrary key lookup.
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for values that do not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let timeouts = WebhookTimeouts {
            request_secs: parse_positive(
                "KYC_WEBHOOK_REQUEST_TIMEOUT_SECS",
                get("KYC_WEBHOOK_REQUEST_TIMEOUT_SECS"),
                DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_positive(
                "KYC_WEBHOOK_CONNECT_TIMEOUT_SECS",
                get("KYC_WEBHOOK_CONNECT_TIMEOUT_SECS"),
                DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let allowed_webhook_prefixes = get("KYC_ALLOWED_WEBHOOK_PREFIXES")
            .map(|raw| parse_prefixes(&raw))
            .transpose()?
            .unwrap_or_default();
        let site_dir = get("KYC_SITE_DIR").map(PathBuf::from);

        Ok(Self { port, timeouts, allowed_webhook_prefixes, site_dir })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => match value.parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid { var, reason: e.to_string(), value }),
        },
    }
}

fn parse_positive(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match parse_or(var, raw, default)? {
        0 => Err(ConfigError::Invalid { var, value: "0".into(), reason: "must be at least 1".into() }),
        secs => Ok(secs),
    }
}

fn parse_prefixes(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with("https://") || p.starts_with("http://") {
                Ok(p.to_owned())
            } else {
                Err(ConfigError::Invalid {
                    var: "KYC_ALLOWED_WEBHOOK_PREFIXES",
                    value: p.to_owned(),
                    reason: "prefix must start with http:// or https://".into(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
