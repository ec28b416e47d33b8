use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventgate_core::error::CoreError;
use eventgate_core::validation::ValidationError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `eventgate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A body that is not JSON or does not deserialize into the payload type.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),

    /// Field-level payload errors from the `validator` derives.
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(err) => {
                    (StatusCode::BAD_REQUEST, err.code(), err.to_string())
                }
                CoreError::Config(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Schema errors ---
            AppError::InvalidJson(rejection) => (
                StatusCode::BAD_REQUEST,
                "INVALID_PAYLOAD",
                rejection.body_text(),
            ),
            AppError::InvalidPayload(errors) => (
                StatusCode::BAD_REQUEST,
                "INVALID_PAYLOAD",
                errors.to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
