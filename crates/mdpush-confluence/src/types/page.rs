//! Confluence page types.

use serde::{Deserialize, Serialize};

use crate::error::ConfluenceError;

/// Body representation used for page updates.
pub const EDITOR_REPRESENTATION: &str = "editor";

/// Confluence page as returned by `GET /rest/api/content/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Content type (usually "page").
    #[serde(rename = "type")]
    pub content_type: String,
    /// Page title.
    pub title: String,
    /// Version information.
    pub version: Version,
    /// Page body content (only present when expanded).
    #[serde(default)]
    pub body: Option<Body>,
    /// Hypermedia links.
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

/// Page version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Version {
    /// Version number.
    pub number: u32,
    /// Version message/comment.
    #[serde(default)]
    pub message: Option<String>,
}

/// Page body content.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Body {
    /// Storage format content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Content>,
    /// Editor format content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<Content>,
}

/// A body value in a given representation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Content {
    /// Markup in the named representation.
    pub value: String,
    /// Representation name (e.g., "storage", "editor").
    pub representation: String,
}

/// Hypermedia links.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Links {
    /// Web UI link, relative to the site base URL.
    #[serde(default)]
    pub webui: Option<String>,
    /// Site base URL.
    #[serde(default)]
    pub base: Option<String>,
}

impl Links {
    /// Absolute web URL of the page, when the server reported both parts.
    #[must_use]
    pub fn web_url(&self) -> Option<String> {
        match (&self.base, &self.webui) {
            (Some(base), Some(webui)) => Some(format!("{base}{webui}")),
            _ => None,
        }
    }
}

/// Full-resource replacement payload for `PUT /rest/api/content/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate {
    /// Page ID, echoed from the fetched page.
    pub id: String,
    /// Content type, echoed from the fetched page.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Page title, echoed from the fetched page.
    pub title: String,
    /// Next version.
    pub version: VersionUpdate,
    /// Replacement body.
    pub body: Body,
}

/// Version block of an update payload.
#[derive(Debug, Clone, Serialize)]
pub struct VersionUpdate {
    /// Must be exactly one more than the current version.
    pub number: u32,
    /// Optional version message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PageUpdate {
    /// Build an update that replaces the body of `current` with `html`.
    ///
    /// ID, type and title are carried over unchanged; the version number is
    /// bumped by one so the server accepts the write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::VersionExhausted`] if the current version
    /// has no successor.
    pub fn replacing(
        current: &Page,
        html: &str,
        message: Option<&str>,
    ) -> Result<Self, ConfluenceError> {
        let number = current.version.number.checked_add(1).ok_or(
            ConfluenceError::VersionExhausted {
                version: current.version.number,
            },
        )?;

        Ok(Self {
            id: current.id.clone(),
            content_type: current.content_type.clone(),
            title: current.title.clone(),
            version: VersionUpdate {
                number,
                message: message.map(str::to_owned),
            },
            body: Body {
                storage: None,
                editor: Some(Content {
                    value: html.to_owned(),
                    representation: EDITOR_REPRESENTATION.to_owned(),
                }),
            },
        })
    }
}
