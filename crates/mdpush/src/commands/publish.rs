//! Publish command: convert the markdown source and replace the page body.

use clap::Args;
use mdpush_config::ActionConfig;
use mdpush_confluence::{
    BasicAuth, ConfluenceClient, DryRunResult, PageUpdater, UpdateConfig, UpdateResult,
};
use mdpush_renderer::convert_markdown;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for publishing a markdown file.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Version message for the update.
    #[arg(short, long, env = "INPUT_MESSAGE")]
    message: Option<String>,

    /// Preview changes without updating Confluence.
    #[arg(long)]
    dry_run: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete, the source file
    /// cannot be read, the page cannot be fetched, or the update is rejected.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = ActionConfig::from_env()?;
        info!("Loaded configuration: {config:?}");

        let source = config.source_path();
        let markdown = std::fs::read_to_string(&source).map_err(|err| CliError::Read {
            path: source.clone(),
            source: err,
        })?;
        output.info(&format!("Converting {}...", source.display()));

        let html = convert_markdown(&markdown);

        let auth = BasicAuth::new(&config.user, &config.token);
        let client = ConfluenceClient::for_cloud(&config.cloud, auth);
        let updater = PageUpdater::new(
            &client,
            UpdateConfig {
                message: self.message(),
            },
        );

        if self.dry_run {
            let result = updater.dry_run(&config.to, &html)?;
            print_dry_run_result(output, &result);
        } else {
            let result = updater.update(&config.to, &html)?;
            report_update(output, &result)?;
        }

        Ok(())
    }

    /// Version message, treating an empty input as absent.
    fn message(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }
}

fn print_dry_run_result(output: &Output, result: &DryRunResult) {
    output.highlight("\n[DRY RUN] No changes made.");
    output.info(&format!(
        "Current page: \"{}\" (v{})",
        result.current_title, result.current_version
    ));
    output.info(&format!(
        "Would update page {} to version {}",
        result.page_id, result.next_version
    ));
    output.result(&result.html);
}

/// Print the outcome of a completed update, then fail if it was rejected.
fn report_update(output: &Output, result: &UpdateResult) -> Result<(), CliError> {
    for line in status_lines(result) {
        output.result(&line);
    }

    if result.is_success() {
        output.success(&format!(
            "\nPage \"{}\" updated to version {}",
            result.title, result.new_version
        ));
        if let Some(url) = &result.url {
            output.info(&format!("URL: {url}"));
        }
    } else {
        output.warning(&format!(
            "\nUpdate of page {} from version {} was rejected",
            result.page_id, result.previous_version
        ));
    }

    result.error_for_status()?;
    Ok(())
}

/// Lines reported on stdout for every update the server answered.
fn status_lines(result: &UpdateResult) -> [String; 2] {
    [
        format!("Status Code: {}", result.response.status),
        format!("Response Body: {}", result.response.body),
    ]
}

#[cfg(test)]
mod tests {
    use mdpush_confluence::{ConfluenceError, PutResponse};
    use pretty_assertions::assert_eq;

    use super::*;

    fn update_result(status: u16, body: &str) -> UpdateResult {
        UpdateResult {
            page_id: "123".to_owned(),
            title: "T".to_owned(),
            previous_version: 5,
            new_version: 6,
            url: None,
            response: PutResponse {
                status,
                body: body.to_owned(),
            },
        }
    }

    #[test]
    fn test_status_lines_on_success() {
        let result = update_result(200, r#"{"id":"123"}"#);
        assert_eq!(
            status_lines(&result),
            [
                "Status Code: 200".to_owned(),
                r#"Response Body: {"id":"123"}"#.to_owned(),
            ]
        );
    }

    #[test]
    fn test_status_lines_on_conflict() {
        let result = update_result(409, "Version must be incremented");
        assert_eq!(
            status_lines(&result),
            [
                "Status Code: 409".to_owned(),
                "Response Body: Version must be incremented".to_owned(),
            ]
        );
    }

    #[test]
    fn test_report_update_success() {
        let result = update_result(200, "{}");
        assert!(report_update(&Output::new(), &result).is_ok());
    }

    #[test]
    fn test_report_update_conflict_is_error() {
        let result = update_result(409, "Version must be incremented");

        let err = report_update(&Output::new(), &result).unwrap_err();
        assert!(
            matches!(
                &err,
                CliError::Confluence(ConfluenceError::VersionConflict { body })
                    if body == "Version must be incremented"
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn test_report_update_other_rejection_is_error() {
        let result = update_result(403, "forbidden");

        let err = report_update(&Output::new(), &result).unwrap_err();
        assert!(matches!(
            err,
            CliError::Confluence(ConfluenceError::HttpResponse { status: 403, .. })
        ));
    }
}
