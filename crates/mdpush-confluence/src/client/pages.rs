//! Page operations for Confluence API.

use tracing::{info, warn};

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{Page, PageUpdate};

/// Raw outcome of a page update request.
///
/// Returned for every HTTP status so callers can always report what the
/// server said; use [`error_for_status`](Self::error_for_status) to turn a
/// rejection into an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl PutResponse {
    /// Whether the server accepted the update.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert a rejected update into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::VersionConflict`] for 409 and
    /// [`ConfluenceError::HttpResponse`] for any other non-2xx status.
    pub fn error_for_status(&self) -> Result<(), ConfluenceError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ConfluenceError::from_status(self.status, self.body.clone()))
        }
    }
}

impl ConfluenceClient {
    /// Get page by ID.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, error statuses, and bodies that lack the
    /// page identity or version.
    pub fn get_page(&self, page_id: &str) -> Result<Page, ConfluenceError> {
        let url = self.content_url(page_id);

        info!("Getting page {}", page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", self.auth.header())
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ConfluenceError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let text = body_reader.read_to_string()?;
        let page: Page = serde_json::from_str(&text)?;
        info!(
            "Page {} is \"{}\" at version {}",
            page.id, page.title, page.version.number
        );
        Ok(page)
    }

    /// Replace page content.
    ///
    /// Only transport failures are errors; the server's verdict comes back
    /// as a [`PutResponse`] whatever the status.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized or the request cannot be
    /// sent or read.
    pub fn update_page(
        &self,
        page_id: &str,
        update: &PageUpdate,
    ) -> Result<PutResponse, ConfluenceError> {
        let url = self.content_url(page_id);

        info!(
            "Updating page {} to version {}",
            page_id, update.version.number
        );

        let payload_bytes = serde_json::to_vec(update)?;

        let response = self
            .agent
            .put(&url)
            .header("Authorization", self.auth.header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let body = response.into_body().read_to_string()?;

        let result = PutResponse { status, body };
        if result.is_success() {
            info!(
                "Updated page {} to version {}",
                page_id, update.version.number
            );
        } else {
            warn!("Update of page {} rejected with status {}", page_id, status);
        }
        Ok(result)
    }

    /// URL of a single content resource.
    fn content_url(&self, page_id: &str) -> String {
        format!("{}/content/{}", self.api_url(), page_id)
    }
}
