use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

use super::*;

type Received = Arc<Mutex<Vec<Value>>>;

async fn webhook(State((received, status)): State<(Received, StatusCode)>, Json(body): Json<Value>) -> (StatusCode, &'static str) {
    received.lock().expect("mock mutex should lock").push(body);
    (status, "sheet says no")
}

async fn spawn_webhook(status: StatusCode) -> (SocketAddr, Received) {
    let received = Received::default();
    let app = Router::new().route("/hook", post(webhook)).with_state((Arc::clone(&received), status));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (addr, received)
}

fn record() -> SheetRecord {
    SheetRecord {
        timestamp: "2026-01-01T00:00:00Z".into(),
        name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        phone: "9876543210".into(),
        address: "12 MG Road".into(),
        company_name: "Acme".into(),
        company_website: "https://acme.example".into(),
        company_email: "ops@acme.example".into(),
        solutions: "Exchange Solutions".into(),
        has_passport_photo: "Yes".into(),
    }
}

fn client() -> SheetsClient {
    SheetsClient::new(WebhookTimeouts { request_secs: 5, connect_secs: 2 }).unwrap()
}

#[tokio::test]
async fn append_posts_record_as_json() {
    let (addr, received) = spawn_webhook(StatusCode::OK).await;

    client().append(&format!("http://{addr}/hook"), &record()).await.unwrap();

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["companyName"], json!("Acme"));
    assert_eq!(received[0]["hasPassportPhoto"], json!("Yes"));
    assert_eq!(received[0]["timestamp"], json!("2026-01-01T00:00:00Z"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (addr, _) = spawn_webhook(StatusCode::BAD_GATEWAY).await;

    let err = client().append(&format!("http://{addr}/hook"), &record()).await.unwrap_err();
    assert_eq!(err, SheetError::Status { status: 502, body: "sheet says no".into() });
    assert_eq!(err.to_string(), "Webhook failed: 502");
}

#[tokio::test]
async fn unreachable_webhook_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client().append(&format!("http://{addr}/hook"), &record()).await.unwrap_err();
    assert!(matches!(err, SheetError::Request(_)));
}

#[tokio::test]
async fn invalid_url_is_a_request_error() {
    let err = client().append("not a url", &record()).await.unwrap_err();
    assert!(matches!(err, SheetError::Request(_)));
}
