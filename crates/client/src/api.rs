//! HTTP client for the catalog API.
//!
//! Browsing pages do not talk to the Record Store directly; they go through
//! the catalog API's `/api/video` endpoints. [`CatalogApi`] implements
//! [`RecordStore`] over HTTP so the browser and upload flows stay agnostic
//! about which side of the API they run on.

use async_trait::async_trait;

use aniop_core::model::{VideoEntry, VideoFields};
use aniop_core::store::{RecordStore, StoreError};

use crate::config::ClientConfig;

/// HTTP client bound to one catalog API base URL.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogApi {
    /// Create a new client. The base URL is normalized to have no trailing
    /// slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn videos_url(&self) -> String {
        format!("{}/api/video", self.base_url)
    }

    /// Parse a response, converting error statuses and undecodable bodies
    /// into [`StoreError`]s that carry the server's own message text.
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Unavailable(format!(
                "catalog API error ({}): {}",
                status.as_u16(),
                body
            )));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| StoreError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl RecordStore for CatalogApi {
    async fn list_entries(&self) -> Result<Vec<VideoEntry>, StoreError> {
        let response = self
            .client
            .get(self.videos_url())
            .send()
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        Self::parse(response).await
    }

    async fn create_entry(&self, fields: VideoFields) -> Result<VideoEntry, StoreError> {
        let response = self
            .client
            .post(self.videos_url())
            .json(&fields)
            .send()
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        Self::parse(response).await
    }
}
