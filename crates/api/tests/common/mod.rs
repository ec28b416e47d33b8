#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use eventgate_api::config::ServerConfig;
use eventgate_api::router::build_app_router;
use eventgate_api::state::AppState;
use eventgate_core::clock::ZoneClock;

/// Build a test `ServerConfig` with safe defaults, pinned to UTC.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        event_timezone: Some("+00:00".to_string()),
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> Router {
    build_test_app_in_zone("+00:00")
}

/// Same as [`build_test_app`], with validators pinned to `offset`.
pub fn build_test_app_in_zone(offset: &str) -> Router {
    let config = ServerConfig {
        event_timezone: Some(offset.to_string()),
        ..test_config()
    };
    let clock = config.clock().unwrap();
    let state = AppState {
        config: Arc::new(config.clone()),
        clock,
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Parse an RFC 3339 string from a response body.
pub fn parse_ts(value: &serde_json::Value) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap()).unwrap()
}

/// Tomorrow at `hour`:00 UTC.
pub fn tomorrow(hour: u32) -> DateTime<FixedOffset> {
    (Utc::now() + Duration::days(1))
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
        .fixed_offset()
}

/// Tomorrow at `hour`:00 UTC, as an RFC 3339 string.
pub fn tomorrow_at(hour: u32) -> String {
    tomorrow(hour).to_rfc3339()
}
