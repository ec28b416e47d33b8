pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /events/validate                                 create-event validation (POST)
/// /events/search/validate                          search filter validation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/events", events::router())
}
