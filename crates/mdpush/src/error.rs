//! CLI error types.

use std::path::PathBuf;

use mdpush_config::ConfigError;
use mdpush_confluence::{ConfluenceError, UpdateError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Update(#[from] UpdateError),

    #[error("{0}")]
    Confluence(#[from] ConfluenceError),
}
