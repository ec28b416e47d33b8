use eventgate_core::clock::ZoneClock;
use eventgate_core::error::CoreError;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// UTC offset used for "now" and calendar-day checks, e.g. `+02:00`.
    /// Unset means the host's local offset.
    pub event_timezone: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `EVENT_TIMEZONE`       | unset (system local time)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let event_timezone = std::env::var("EVENT_TIMEZONE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            event_timezone,
        }
    }

    /// Resolve the configured timezone into a clock.
    pub fn clock(&self) -> Result<ZoneClock, CoreError> {
        ZoneClock::from_setting(self.event_timezone.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::FixedOffset;

    fn config(event_timezone: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            event_timezone: event_timezone.map(str::to_string),
        }
    }

    #[test]
    fn unset_timezone_uses_system_clock() {
        assert_eq!(config(None).clock().unwrap(), ZoneClock::system());
    }

    #[test]
    fn offset_timezone_is_pinned() {
        let clock = config(Some("-03:30")).clock().unwrap();
        assert_eq!(
            clock.configured_offset(),
            FixedOffset::west_opt(3 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn named_zone_is_rejected() {
        assert_matches!(
            config(Some("America/New_York")).clock(),
            Err(CoreError::Config(_))
        );
    }
}
