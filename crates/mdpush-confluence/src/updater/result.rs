//! Result types for page update operations.

use crate::client::PutResponse;
use crate::error::ConfluenceError;

/// Result of a page update.
#[derive(Debug)]
pub struct UpdateResult {
    /// Updated page ID.
    pub page_id: String,
    /// Page title (unchanged by the update).
    pub title: String,
    /// Version number before the update.
    pub previous_version: u32,
    /// Version number that was submitted.
    pub new_version: u32,
    /// Web URL of the page, when the server reported one.
    pub url: Option<String>,
    /// Server response to the update request.
    pub response: PutResponse,
}

impl UpdateResult {
    /// Whether the server accepted the update.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }

    /// Convert a rejected update into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::VersionConflict`] for 409 and
    /// [`ConfluenceError::HttpResponse`] for any other non-2xx status.
    pub fn error_for_status(&self) -> Result<(), ConfluenceError> {
        self.response.error_for_status()
    }
}

/// Result of a dry-run update (no changes made).
#[derive(Debug)]
pub struct DryRunResult {
    /// Page ID.
    pub page_id: String,
    /// Current page title.
    pub current_title: String,
    /// Current version number.
    pub current_version: u32,
    /// Version number an update would submit.
    pub next_version: u32,
    /// HTML that would be sent.
    pub html: String,
}
