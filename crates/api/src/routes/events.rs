//! Route definitions for the `/events` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// POST   /validate          -> validate_event
/// POST   /search/validate   -> validate_search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(events::validate_event))
        .route("/search/validate", post(events::validate_search))
}
