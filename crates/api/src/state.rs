use std::sync::Arc;

use eventgate_core::clock::ZoneClock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: config is behind an `Arc` and the clock is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Clock every validator reads "now" from.
    pub clock: ZoneClock,
}
