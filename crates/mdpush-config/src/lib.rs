//! Configuration management for mdpush.
//!
//! All settings come from the process environment, in the shape a GitHub
//! Action receives its inputs:
//!
//! - `GITHUB_WORKSPACE` - root directory for resolving the source file
//! - `INPUT_FROM` - markdown file path, relative to the workspace
//! - `INPUT_TO` - Confluence page ID to update
//! - `INPUT_CLOUD` - Atlassian Cloud subdomain
//! - `INPUT_USER` - account used for basic authentication
//! - `INPUT_TOKEN` - API token used for basic authentication
//!
//! Every value is required and must be non-empty. No defaults are applied.

use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the workspace root.
pub const WORKSPACE_VAR: &str = "GITHUB_WORKSPACE";

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `GITHUB_WORKSPACE` is unset or empty.
    #[error("No workspace is set")]
    MissingWorkspace,
    /// A required `INPUT_*` variable is unset or empty.
    #[error("Missing value for {key}")]
    MissingInput {
        /// Logical input name (e.g., "token").
        key: &'static str,
    },
}

/// Resolved action configuration.
///
/// Loaded once per run and passed explicitly to whatever needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Workspace root directory.
    pub workspace: PathBuf,
    /// Markdown file path relative to [`workspace`](Self::workspace).
    pub from: String,
    /// Confluence page ID.
    pub to: String,
    /// Atlassian Cloud subdomain.
    pub cloud: String,
    /// Basic auth user.
    pub user: String,
    /// Basic auth API token.
    pub token: String,
}

impl ActionConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first missing or empty value, checking the workspace first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// Returns the first missing or empty value, checking the workspace first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let workspace = non_empty(lookup(WORKSPACE_VAR)).ok_or(ConfigError::MissingWorkspace)?;

        let input = |key: &'static str| {
            non_empty(lookup(&input_var(key))).ok_or(ConfigError::MissingInput { key })
        };

        // Field initializers run in order, so the first missing input is reported.
        Ok(Self {
            workspace: PathBuf::from(workspace),
            from: input("from")?,
            to: input("to")?,
            cloud: input("cloud")?,
            user: input("user")?,
            token: input("token")?,
        })
    }

    /// Absolute path of the markdown source file.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.workspace.join(Path::new(&self.from))
    }
}

impl fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("workspace", &self.workspace)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("cloud", &self.cloud)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Environment variable name for a logical input key.
fn input_var(key: &str) -> String {
    format!("INPUT_{}", key.to_uppercase())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
