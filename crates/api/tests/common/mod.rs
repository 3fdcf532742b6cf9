//! Shared helpers for API integration tests: an in-memory Record Store
//! double and request/response plumbing around `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use aniop_api::config::ServerConfig;
use aniop_api::router::build_app_router;
use aniop_api::state::AppState;
use aniop_core::model::{VideoEntry, VideoFields};
use aniop_core::store::{RecordStore, StoreError};

// ---------------------------------------------------------------------------
// In-memory Record Store double
// ---------------------------------------------------------------------------

/// Record Store test double: documents live in a `Mutex<Vec<_>>`, ids are
/// generated locally, and the whole store can be switched into a failing
/// mode to simulate an unreachable backend.
#[derive(Default)]
pub struct InMemoryRecordStore {
    entries: Mutex<Vec<VideoEntry>>,
    fail_with: Option<String>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `entries`.
    pub fn seeded(entries: Vec<VideoEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            fail_with: None,
        }
    }

    /// A store whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_entries(&self) -> Result<Vec<VideoEntry>, StoreError> {
        if let Some(message) = &self.fail_with {
            return Err(StoreError::Unavailable(message.clone()));
        }
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn create_entry(&self, fields: VideoFields) -> Result<VideoEntry, StoreError> {
        if let Some(message) = &self.fail_with {
            return Err(StoreError::Unavailable(message.clone()));
        }
        let entry = VideoEntry {
            id: uuid::Uuid::new_v4().to_string(),
            fields,
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, backed by
/// the given Record Store.
///
/// This uses the same `build_app_router` as `main.rs`, so integration tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(records: Arc<dyn RecordStore>) -> Router {
    let config = test_config();
    let state = AppState {
        records,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request / response helpers
// ---------------------------------------------------------------------------

/// Send a GET request to `uri` and return the response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to `uri` and return the response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a bare OPTIONS request (no preflight request headers) to `uri`.
pub async fn options(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("Origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
