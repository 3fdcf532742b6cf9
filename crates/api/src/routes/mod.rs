pub mod health;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /video    GET list, POST create, OPTIONS preflight
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(videos::router())
}
