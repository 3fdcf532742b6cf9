//! Service traits for the remote document and object stores.
//!
//! The catalog is backed by a hosted backend-as-a-service; this module
//! defines the narrow contract the rest of the system relies on. Handlers
//! and workflows take `Arc<dyn RecordStore>` / `&dyn BlobStore` handles so
//! tests can substitute in-memory doubles.

use async_trait::async_trait;

use crate::model::{VideoEntry, VideoFields};

/// Failure of a remote store call.
///
/// The underlying message is preserved so the API layer and the upload
/// workflow can surface it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The remote call failed: network error, or an error status from the
    /// backend.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered, but the payload did not match the expected
    /// shape.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// A file selected for upload to the Blob Store.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    /// Original file name, e.g. `cover.png`.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// The remote document database holding [`VideoEntry`] documents.
///
/// Append-only from this system's perspective: no update or delete
/// operation exists on this trait by design.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every document in the catalog collection, unfiltered and
    /// unpaginated.
    async fn list_entries(&self) -> Result<Vec<VideoEntry>, StoreError>;

    /// Create one document with a backend-generated unique id and return
    /// the stored entry.
    ///
    /// Not idempotent: repeated calls with identical fields create distinct
    /// records with distinct ids.
    async fn create_entry(&self, fields: VideoFields) -> Result<VideoEntry, StoreError>;
}

/// The remote object store holding uploaded image/video files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload one blob under a backend-generated id and return its public
    /// view URL (not the raw upload response).
    async fn upload(&self, file: FilePayload) -> Result<String, StoreError>;
}
