use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trailers_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for service failures and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure raised by the trailer service.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The resource contract surfaces exactly one failure kind: every
        // service failure and every input-parsing failure answers 400, with
        // no 404/409/500 distinction.
        let message = match &self {
            AppError::Core(core) => {
                if let CoreError::Internal(msg) = core {
                    tracing::error!(error = %msg, "Internal service error");
                }
                core.to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
        };

        let body = json!({
            "error": message,
            "code": "BAD_REQUEST",
        });

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
