use std::sync::Arc;

use aniop_core::store::RecordStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the remote document store holding catalog entries.
    /// Injected as a trait object so tests can swap in an in-memory double.
    pub records: Arc<dyn RecordStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
