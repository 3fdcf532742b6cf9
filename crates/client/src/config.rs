//! Configuration for pages talking to the catalog API.

/// Where browsing pages find the catalog API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL of the catalog API, e.g. `http://localhost:3000`.
    /// Stored without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var    | Required |
    /// |------------|----------|
    /// | `BASE_URL` | yes      |
    pub fn from_env() -> Self {
        let base_url = std::env::var("BASE_URL").expect("BASE_URL must be set");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
