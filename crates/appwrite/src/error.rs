//! Error type for the Appwrite REST clients.

use aniop_core::store::StoreError;

/// Errors from the Appwrite REST layer.
#[derive(Debug, thiserror::Error)]
pub enum AppwriteError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Appwrite returned a non-2xx status code.
    #[error("Appwrite API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },
}

impl From<AppwriteError> for StoreError {
    fn from(err: AppwriteError) -> Self {
        match &err {
            // A 2xx response whose body failed to parse is a shape problem,
            // not an availability problem.
            AppwriteError::Request(e) if e.is_decode() => StoreError::Malformed(err.to_string()),
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}
