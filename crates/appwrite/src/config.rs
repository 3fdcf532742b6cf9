//! Connection configuration for the Appwrite backend.

/// Connection settings shared by all Appwrite clients.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// Base REST endpoint, e.g. `https://fra.cloud.appwrite.io/v1`.
    /// Stored without a trailing slash.
    pub endpoint: String,
    /// Project identifier, sent as `X-Appwrite-Project` with every request
    /// and embedded in view URLs.
    pub project_id: String,
    /// Optional server API key, sent as `X-Appwrite-Key` when present.
    pub api_key: Option<String>,
}

impl AppwriteConfig {
    /// Build a config from explicit values. The endpoint is normalized to
    /// have no trailing slash.
    pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: None,
        }
    }

    /// Attach a server API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required |
    /// |------------------------|----------|
    /// | `APPWRITE_ENDPOINT`    | yes      |
    /// | `APPWRITE_PROJECT_ID`  | yes      |
    /// | `APPWRITE_API_KEY`     | no       |
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("APPWRITE_ENDPOINT").expect("APPWRITE_ENDPOINT must be set");
        let project_id =
            std::env::var("APPWRITE_PROJECT_ID").expect("APPWRITE_PROJECT_ID must be set");

        let mut config = Self::new(endpoint, project_id);
        if let Ok(api_key) = std::env::var("APPWRITE_API_KEY") {
            config.api_key = Some(api_key);
        }
        config
    }
}
