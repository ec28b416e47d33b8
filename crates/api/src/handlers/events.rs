//! Handlers for the `/events` resource.
//!
//! Each handler is a pipeline stage: the JSON body is parsed by axum (a body
//! that does not deserialize is a 400 `INVALID_PAYLOAD`), checked against its
//! field-level schema, then run through the semantic validation
//! chain. A valid payload is echoed back (normalized); the first failure
//! aborts the request with a 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use eventgate_core::event::CreateEvent;
use eventgate_core::search::{EffectiveRange, SearchFilter};
use eventgate_core::validation::{validate_create_event, validate_search_filter, ValidationError};
use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/events/validate
///
/// Validate a create-event payload. Returns the normalized event.
pub async fn validate_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEvent>, JsonRejection>,
) -> AppResult<Json<DataResponse<CreateEvent>>> {
    let Json(input) = payload.inspect_err(log_unparseable)?;
    if let Err(errors) = input.validate() {
        tracing::info!(%errors, "Rejected event payload schema");
        return Err(errors.into());
    }

    let event = validate_create_event(input, &state.clock).map_err(log_rejection)?;
    tracing::debug!(
        title = %event.title,
        recurring = event.is_recurring,
        restricted = event.is_restricted,
        "Event payload accepted"
    );

    Ok(Json(DataResponse { data: event }))
}

/// Body returned by [`validate_search`].
#[derive(Debug, Serialize)]
pub struct SearchFilterCheck {
    pub filter: SearchFilter,
    /// Resolved `[after, before]` range, absent when no date filter was given.
    pub range: Option<EffectiveRange>,
}

/// POST /api/v1/events/search/validate
///
/// Validate a search filter's date ranges and return the effective range.
pub async fn validate_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchFilter>, JsonRejection>,
) -> AppResult<Json<DataResponse<SearchFilterCheck>>> {
    let Json(filter) = payload.inspect_err(log_unparseable)?;
    let range = validate_search_filter(&filter, &state.clock).map_err(log_rejection)?;
    Ok(Json(DataResponse {
        data: SearchFilterCheck { filter, range },
    }))
}

fn log_unparseable(rejection: &JsonRejection) {
    tracing::info!(error = %rejection.body_text(), "Rejected unparseable payload");
}

fn log_rejection(err: ValidationError) -> ValidationError {
    tracing::info!(code = err.code(), error = %err, "Rejected payload");
    err
}
