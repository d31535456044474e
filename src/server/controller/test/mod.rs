use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    router::{router, BoundaryLimits, RateLimit},
    service::{drone::lock::DroneLockRegistry, event::EventService},
    state::AppState,
};


const LIMITS: BoundaryLimits = BoundaryLimits {
    request_timeout: Duration::from_secs(5),
    max_concurrent_requests: 16,
    rate_limit: None,
};

/// Builds the full API router over a fresh in-memory database.
async fn setup() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();
    let state = AppState::new(db.clone(), DroneLockRegistry::new(), EventService::new());

    (router(state, LIMITS), db)
}

/// Sends one request and returns the status with the decoded JSON body.
///
/// An empty body decodes to `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Tests that the OpenAPI document lists the drone endpoints.
///
/// Expected: 200 with `/api/drones/{drone_id}/medications` among the paths
#[tokio::test]
async fn serves_openapi_document() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/drones/{drone_id}/medications"].is_object());
    assert!(body["paths"]["/api/medications"].is_object());
}

/// Sends a GET on behalf of the client at `ip`.
async fn get_from(app: &Router, uri: &str, ip: &str) -> StatusCode {
    let request = Request::builder()
        .uri(uri)
        .header("x-forwarded-for", ip)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

/// Tests the per-client rate limit.
///
/// Verifies a client exceeding its burst is refused while another client is still
/// served.
///
/// Expected: 200, 200, then 429 for the first client; 200 for the second
#[tokio::test]
async fn limits_requests_per_client() {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();
    let state = AppState::new(db, DroneLockRegistry::new(), EventService::new());
    let app = router(
        state,
        BoundaryLimits {
            rate_limit: RateLimit::from_config(60_000, 2),
            ..LIMITS
        },
    );

    assert_eq!(get_from(&app, "/api/drones", "10.0.0.1").await, StatusCode::OK);
    assert_eq!(get_from(&app, "/api/drones", "10.0.0.1").await, StatusCode::OK);
    assert_eq!(
        get_from(&app, "/api/drones", "10.0.0.1").await,
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(get_from(&app, "/api/drones", "10.0.0.2").await, StatusCode::OK);
}

/// Tests that zero in either rate limit setting turns the limit off.
///
/// Expected: None for a zero burst or interval, Some otherwise
#[test]
fn disables_rate_limit_for_zero_settings() {
    assert!(RateLimit::from_config(100, 0).is_none());
    assert!(RateLimit::from_config(0, 50).is_none());

    let limit = RateLimit::from_config(100, 50).unwrap();
    assert_eq!(limit.replenish_interval, Duration::from_millis(100));
    assert_eq!(limit.burst_size, 50);
}
