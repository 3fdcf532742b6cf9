//! Handlers for the catalog listing and creation endpoints.
//!
//! Both endpoints proxy straight to the configured [`RecordStore`]: no
//! server-side filtering, no pagination, no schema validation -- field
//! constraints are the Record Store's to enforce.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use aniop_core::model::VideoFields;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/video
// ---------------------------------------------------------------------------

/// List every catalog entry as a bare JSON array.
pub async fn list_videos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = state.records.list_entries().await?;

    tracing::debug!(count = entries.len(), "Fetched catalog entries");

    Ok(Json(entries))
}

// ---------------------------------------------------------------------------
// POST /api/video
// ---------------------------------------------------------------------------

/// Create one catalog entry and return it with its generated id.
///
/// The field set is forwarded verbatim to the Record Store, missing fields
/// included. An unparseable body fails exactly like a backend failure:
/// `500` with the message envelope. Not idempotent: identical bodies
/// create distinct records.
pub async fn create_video(
    State(state): State<AppState>,
    payload: Result<Json<VideoFields>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(fields) = payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

    let entry = state.records.create_entry(fields).await?;

    tracing::info!(id = %entry.id, name = %entry.fields.name, "Created catalog entry");

    Ok((StatusCode::CREATED, Json(entry)))
}

// ---------------------------------------------------------------------------
// OPTIONS /api/video
// ---------------------------------------------------------------------------

/// Preflight response for cross-origin callers: `204`, no body.
///
/// The allow-origin header comes from the CORS middleware layer; the
/// method/header allowances are stated here.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
