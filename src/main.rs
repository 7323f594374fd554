mod config;
mod error;
mod routes;
mod sheets;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::RelayConfig::from_env().expect("invalid relay configuration");
    let sheets = sheets::SheetsClient::new(config.timeouts).expect("webhook client build failed");

    if config.allowed_webhook_prefixes.is_empty() {
        tracing::warn!("KYC_ALLOWED_WEBHOOK_PREFIXES unset; any webhook URL will be accepted");
    }

    let state = state::AppState::new(Arc::new(sheets), config.allowed_webhook_prefixes.clone());
    let app = routes::app(state, config.site_dir.as_deref());

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, site = ?config.site_dir, "kyc relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
