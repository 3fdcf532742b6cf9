//! REST client for the Appwrite Databases service.
//!
//! Wraps the two document operations the catalog relies on -- list all
//! documents, create one document with a generated id -- using [`reqwest`].
//! Implements [`RecordStore`] so callers stay decoupled from the wire
//! format.

use async_trait::async_trait;
use serde::Deserialize;

use aniop_core::model::{VideoEntry, VideoFields};
use aniop_core::store::{RecordStore, StoreError};

use crate::config::AppwriteConfig;
use crate::error::AppwriteError;
use crate::http;

/// HTTP client for one document collection.
pub struct Databases {
    client: reqwest::Client,
    config: AppwriteConfig,
    database_id: String,
    collection_id: String,
}

/// Response of the list-documents endpoint.
#[derive(Debug, Deserialize)]
struct DocumentList {
    total: u64,
    documents: Vec<Document>,
}

/// One document as returned by Appwrite: system fields are `$`-prefixed,
/// custom attributes are inlined at the top level.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "$id")]
    id: String,
    #[serde(flatten)]
    fields: VideoFields,
}

impl From<Document> for VideoEntry {
    fn from(doc: Document) -> Self {
        VideoEntry {
            id: doc.id,
            fields: doc.fields,
        }
    }
}

impl Databases {
    /// Create a new client for one collection.
    pub fn new(
        config: AppwriteConfig,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), config, database_id, collection_id)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across services).
    pub fn with_client(
        client: reqwest::Client,
        config: AppwriteConfig,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            config,
            database_id: database_id.into(),
            collection_id: collection_id.into(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint, self.database_id, self.collection_id
        )
    }

    /// Attach the project header (and API key, when configured) to a request.
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    /// Fetch all documents in the collection.
    pub async fn list_documents(&self) -> Result<Vec<VideoEntry>, AppwriteError> {
        let response = self.authed(self.client.get(self.documents_url())).send().await?;
        let list: DocumentList = http::parse_response(response).await?;

        tracing::debug!(total = list.total, "Listed catalog documents");

        Ok(list.documents.into_iter().map(VideoEntry::from).collect())
    }

    /// Create one document with a server-generated unique id.
    pub async fn create_document(&self, fields: &VideoFields) -> Result<VideoEntry, AppwriteError> {
        let body = serde_json::json!({
            "documentId": "unique()",
            "data": fields,
        });

        let response = self
            .authed(self.client.post(self.documents_url()))
            .json(&body)
            .send()
            .await?;
        let doc: Document = http::parse_response(response).await?;

        tracing::info!(id = %doc.id, "Created catalog document");

        Ok(doc.into())
    }
}

#[async_trait]
impl RecordStore for Databases {
    async fn list_entries(&self) -> Result<Vec<VideoEntry>, StoreError> {
        Ok(self.list_documents().await?)
    }

    async fn create_entry(&self, fields: VideoFields) -> Result<VideoEntry, StoreError> {
        Ok(self.create_document(&fields).await?)
    }
}
