//! Page updater for Confluence.
//!
//! [`PageUpdater`] runs the read-modify-write cycle that replaces a page body:
//!
//! 1. Fetch the current page (ID, type, title, version)
//! 2. Build a [`PageUpdate`](crate::PageUpdate) with version + 1 and the new HTML
//! 3. Submit the update
//!
//! The version bump is what Confluence uses for optimistic concurrency: if
//! someone else saved the page in between, the server answers 409 and
//! [`UpdateResult::error_for_status`] reports a version conflict.

mod error;
mod executor;
mod result;

pub use error::UpdateError;
pub use executor::PageUpdater;
pub use result::{DryRunResult, UpdateResult};

/// Configuration for updating a Confluence page.
#[derive(Debug, Clone, Default)]
pub struct UpdateConfig {
    /// Version message attached to the new page version.
    pub message: Option<String>,
}
