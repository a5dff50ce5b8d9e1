//! Error types for page update operations.

use crate::error::ConfluenceError;

/// Error during page update operation.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// The current page could not be fetched; nothing was written.
    #[error("failed to fetch page {page_id}: {source}")]
    Fetch {
        /// Page that was requested.
        page_id: String,
        /// Underlying API error.
        source: ConfluenceError,
    },

    /// The update could not be built, or its request could not be sent or read.
    #[error("failed to update page {page_id}: {source}")]
    Update {
        /// Page being updated.
        page_id: String,
        /// Underlying API error.
        source: ConfluenceError,
    },
}
