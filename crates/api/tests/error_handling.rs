//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use eventgate_api::error::AppError;
use eventgate_core::error::CoreError;
use eventgate_core::validation::{DateRangeIssue, ValidationError};
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: validation failures map to 400 with their own code and catalog message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_kind_code() {
    let err = AppError::from(ValidationError::InvalidDateRange(
        DateRangeIssue::StartNotInFuture,
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DATE_RANGE");
    assert_eq!(json["error"], "Event start must be in the future");
}

#[tokio::test]
async fn search_validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation(ValidationError::AmbiguousDateFilter));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "AMBIGUOUS_DATE_FILTER");
}

// ---------------------------------------------------------------------------
// Test: schema errors map to 400 with INVALID_PAYLOAD code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schema_error_returns_400() {
    let mut errors = validator::ValidationErrors::new();
    errors.add("title", validator::ValidationError::new("length"));
    let err = AppError::from(errors);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_PAYLOAD");
    assert!(json["error"].as_str().unwrap().contains("title"));
}

// ---------------------------------------------------------------------------
// Test: configuration errors are sanitized 500s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn config_error_returns_500() {
    let err = AppError::Core(CoreError::Config("invalid UTC offset 'Mars/Base'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("Mars"));
}
