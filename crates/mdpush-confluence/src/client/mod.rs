//! Confluence REST API client.
//!
//! Provides sync HTTP client for the Confluence Cloud REST API
//! with HTTP basic authentication (user + API token).

mod auth;
mod pages;

pub use auth::BasicAuth;
pub use pages::PutResponse;

use std::time::Duration;

use ureq::Agent;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth: BasicAuth,
}

impl ConfluenceClient {
    /// Create client for an arbitrary Confluence base URL.
    ///
    /// `base_url` is the wiki root, e.g. `https://acme.atlassian.net/wiki`.
    #[must_use]
    pub fn new(base_url: &str, auth: BasicAuth) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth,
        }
    }

    /// Create client for an Atlassian Cloud tenant.
    #[must_use]
    pub fn for_cloud(cloud: &str, auth: BasicAuth) -> Self {
        Self::new(&cloud_base_url(cloud), auth)
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/rest/api", self.base_url)
    }
}

/// Wiki root URL for an Atlassian Cloud subdomain.
fn cloud_base_url(cloud: &str) -> String {
    format!("https://{cloud}.atlassian.net/wiki")
}
