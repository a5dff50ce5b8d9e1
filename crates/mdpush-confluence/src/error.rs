//! Error types for Confluence integration.

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// HTTP request failed (network error, timeout, TLS, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Page was modified concurrently; the submitted version is stale.
    #[error("version conflict: page was modified since it was fetched - {body}")]
    VersionConflict {
        /// Response body returned with the conflict.
        body: String,
    },

    /// The page is already at the highest version number representable.
    #[error("page version {version} cannot be incremented")]
    VersionExhausted {
        /// Current version reported by the server.
        version: u32,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfluenceError {
    /// Map an HTTP error status to the matching error kind.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        if status == 409 {
            Self::VersionConflict { body }
        } else {
            Self::HttpResponse { status, body }
        }
    }
}
