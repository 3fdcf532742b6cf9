use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use aniop_core::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{"error": ...}` JSON
/// envelope. The catalog API has a single failure mode -- `500` with the
/// triggering message -- whether the failure came from the Record Store or
/// from an unparseable request body; no failure crosses the HTTP boundary
/// as a panic or an empty 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure talking to the remote Record Store. The backend's own
    /// message is surfaced to the caller.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request body that could not be parsed as JSON.
    #[error("{0}")]
    InvalidBody(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "Record store call failed");
                err.to_string()
            }
            AppError::InvalidBody(msg) => {
                tracing::warn!(error = %msg, "Unparseable request body");
                msg.clone()
            }
        };

        let body = json!({ "error": message });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
