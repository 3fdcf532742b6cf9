//! REST client for the Appwrite Storage service.
//!
//! Uploads go to one configured bucket; each stored file gets a
//! backend-generated id, from which the public view URL is built
//! deterministically. Implements [`BlobStore`].

use async_trait::async_trait;
use serde::Deserialize;

use aniop_core::store::{BlobStore, FilePayload, StoreError};

use crate::config::AppwriteConfig;
use crate::error::AppwriteError;
use crate::http;

/// HTTP client for one storage bucket.
pub struct Storage {
    client: reqwest::Client,
    config: AppwriteConfig,
    bucket_id: String,
}

/// The subset of the create-file response the catalog needs.
#[derive(Debug, Deserialize)]
pub struct StoredFile {
    /// Backend-generated file id, used to build the view URL.
    #[serde(rename = "$id")]
    pub id: String,
}

impl Storage {
    /// Create a new client for one bucket.
    pub fn new(config: AppwriteConfig, bucket_id: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), config, bucket_id)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        config: AppwriteConfig,
        bucket_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            config,
            bucket_id: bucket_id.into(),
        }
    }

    fn files_url(&self) -> String {
        format!(
            "{}/storage/buckets/{}/files",
            self.config.endpoint, self.bucket_id
        )
    }

    /// Public view URL of a stored file.
    ///
    /// `{endpoint}/storage/buckets/{bucket}/files/{fileId}/view?project={project}`
    pub fn view_url(&self, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.config.endpoint, self.bucket_id, file_id, self.config.project_id
        )
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    /// Upload one file under a server-generated id.
    pub async fn create_file(&self, file: FilePayload) -> Result<StoredFile, AppwriteError> {
        let file_name = file.file_name.clone();
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)?;
        let form = reqwest::multipart::Form::new()
            .text("fileId", "unique()")
            .part("file", part);

        let response = self
            .authed(self.client.post(self.files_url()))
            .multipart(form)
            .send()
            .await?;
        let stored: StoredFile = http::parse_response(response).await?;

        tracing::info!(id = %stored.id, file_name = %file_name, "Uploaded blob");

        Ok(stored)
    }
}

#[async_trait]
impl BlobStore for Storage {
    async fn upload(&self, file: FilePayload) -> Result<String, StoreError> {
        let stored = self.create_file(file).await?;
        Ok(self.view_url(&stored.id))
    }
}
