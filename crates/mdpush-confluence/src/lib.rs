//! Confluence integration for mdpush.
//!
//! This crate provides:
//! - [`ConfluenceClient`]: REST API client for Confluence Cloud with basic authentication
//! - [`PageUpdater`]: read-modify-write workflow that replaces a page body
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mdpush_confluence::{BasicAuth, ConfluenceClient, PageUpdater, UpdateConfig};
//!
//! let client = ConfluenceClient::for_cloud("acme", BasicAuth::new("bot@acme.test", "token"));
//! let updater = PageUpdater::new(&client, UpdateConfig::default());
//!
//! let result = updater.update("123456", "<p>Hello</p>")?;
//! println!("{} -> {}", result.response.status, result.response.body);
//! result.error_for_status()?;
//! # Ok(())
//! # }
//! ```

// API client
mod client;
pub use client::{BasicAuth, ConfluenceClient, PutResponse};

// Types
pub mod types;
pub use types::{Page, PageUpdate};

// Page updater
mod updater;
pub use updater::{DryRunResult, PageUpdater, UpdateConfig, UpdateError, UpdateResult};

// Errors
pub mod error;
pub use error::ConfluenceError;
