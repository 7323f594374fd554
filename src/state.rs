//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the outbound sheet sink behind a trait object so route tests can
//! swap in a recording mock, plus the webhook allow-list.

use std::sync::Arc;

use crate::sheets::SheetSink;

/// Which webhook URLs the relay is willing to call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookPolicy {
    prefixes: Arc<[String]>,
}

impl WebhookPolicy {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes: prefixes.into() }
    }

    /// An empty allow-list permits any URL.
    #[must_use]
    pub fn permits(&self, url: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| url.starts_with(p.as_str()))
    }
}

/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<dyn SheetSink>,
    pub webhooks: WebhookPolicy,
}

impl AppState {
    pub fn new(sheets: Arc<dyn SheetSink>, allowed_webhook_prefixes: Vec<String>) -> Self {
        Self { sheets, webhooks: WebhookPolicy::new(allowed_webhook_prefixes) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
