//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One API route (`POST /api/submit-kyc`) plus a health check. CORS is open
//! to any origin because the intake page may be hosted separately from the
//! relay. When a site directory is configured, the built client is served
//! as the fallback so a single process can host both.

pub mod submit;

use std::path::Path;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const SUBMIT_PATH: &str = "/api/submit-kyc";

const X_CLIENT_INFO: HeaderName = HeaderName::from_static("x-client-info");
const APIKEY: HeaderName = HeaderName::from_static("apikey");

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, X_CLIENT_INFO, APIKEY, CONTENT_TYPE])
}

/// API routes, optionally falling back to static files under `site_dir`.
pub fn app(state: AppState, site_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route(SUBMIT_PATH, post(submit::submit_kyc))
        .route("/healthz", get(healthz))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match site_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => api,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
