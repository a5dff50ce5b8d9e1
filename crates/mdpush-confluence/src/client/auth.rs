//! HTTP basic authentication for Confluence Cloud.

use std::fmt;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Basic authentication with an Atlassian account and API token.
///
/// The `Authorization` header value is computed once at construction.
#[derive(Clone)]
pub struct BasicAuth {
    header: String,
}

impl BasicAuth {
    /// Create auth from user name (usually an email) and API token.
    #[must_use]
    pub fn new(user: &str, token: &str) -> Self {
        let credentials = BASE64_STANDARD.encode(format!("{user}:{token}"));
        Self {
            header: format!("Basic {credentials}"),
        }
    }

    /// `Authorization` header value.
    pub(crate) fn header(&self) -> &str {
        &self.header
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicAuth(<redacted>)")
    }
}
