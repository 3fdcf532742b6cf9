//! Route definitions for the video catalog.
//!
//! Mounted at `/api`.
//!
//! ```text
//! GET     /video      list_videos
//! POST    /video      create_video
//! OPTIONS /video      preflight
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/video",
        get(videos::list_videos)
            .post(videos::create_video)
            .options(videos::preflight),
    )
}
