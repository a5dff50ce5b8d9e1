//! Page updater implementation.

use tracing::info;

use crate::client::ConfluenceClient;
use crate::types::{Links, Page, PageUpdate};

use super::UpdateConfig;
use super::error::UpdateError;
use super::result::{DryRunResult, UpdateResult};

/// Handles replacing the body of a Confluence page.
pub struct PageUpdater<'a> {
    client: &'a ConfluenceClient,
    config: UpdateConfig,
}

impl<'a> PageUpdater<'a> {
    /// Create a new page updater.
    #[must_use]
    pub fn new(client: &'a ConfluenceClient, config: UpdateConfig) -> Self {
        Self { client, config }
    }

    /// Replace the body of a page with `html`.
    ///
    /// This method:
    /// 1. Fetches the current page
    /// 2. Builds a full replacement with the version bumped by one
    /// 3. Submits the update
    ///
    /// The server's answer is returned whatever its status; check it with
    /// [`UpdateResult::error_for_status`].
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Fetch`] if the current page cannot be fetched
    /// (no update is attempted), or [`UpdateError::Update`] if the update
    /// cannot be built or the request cannot be sent.
    pub fn update(&self, page_id: &str, html: &str) -> Result<UpdateResult, UpdateError> {
        let current = self.fetch(page_id)?;
        let update = self.build_update(page_id, &current, html)?;

        let response =
            self.client
                .update_page(page_id, &update)
                .map_err(|source| UpdateError::Update {
                    page_id: page_id.to_owned(),
                    source,
                })?;

        Ok(UpdateResult {
            page_id: page_id.to_owned(),
            title: current.title,
            previous_version: current.version.number,
            new_version: update.version.number,
            url: current.links.as_ref().and_then(Links::web_url),
            response,
        })
    }

    /// Perform a dry-run update (no changes made).
    ///
    /// Fetches the current page and reports what an update would submit.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Fetch`] if the current page cannot be fetched,
    /// or [`UpdateError::Update`] if no update could be built from it.
    pub fn dry_run(&self, page_id: &str, html: &str) -> Result<DryRunResult, UpdateError> {
        let current = self.fetch(page_id)?;
        let update = self.build_update(page_id, &current, html)?;

        Ok(DryRunResult {
            page_id: page_id.to_owned(),
            current_title: current.title,
            current_version: current.version.number,
            next_version: update.version.number,
            html: html.to_owned(),
        })
    }

    fn fetch(&self, page_id: &str) -> Result<Page, UpdateError> {
        self.client
            .get_page(page_id)
            .map_err(|source| UpdateError::Fetch {
                page_id: page_id.to_owned(),
                source,
            })
    }

    fn build_update(
        &self,
        page_id: &str,
        current: &Page,
        html: &str,
    ) -> Result<PageUpdate, UpdateError> {
        let update = PageUpdate::replacing(current, html, self.config.message.as_deref())
            .map_err(|source| UpdateError::Update {
                page_id: page_id.to_owned(),
                source,
            })?;
        info!(
            "Prepared update of \"{}\" from version {} to {}",
            current.title, current.version.number, update.version.number
        );
        Ok(update)
    }
}
