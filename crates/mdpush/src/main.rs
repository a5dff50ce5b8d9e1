//! mdpush CLI - publish a markdown file to Confluence.
//!
//! Inputs come from the environment (`GITHUB_WORKSPACE` and `INPUT_*`
//! variables), so the binary runs unchanged as a GitHub Action step. A
//! `.env` file in the working directory fills in any that are unset.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::PublishArgs;
use error::CliError;
use output::Output;

/// mdpush - Markdown to Confluence publisher.
#[derive(Parser)]
#[command(name = "mdpush", version, about)]
struct Cli {
    #[command(flatten)]
    publish: PublishArgs,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Variables already set in the environment take precedence over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    match cli.publish.execute(&output) {
        Ok(()) => {}
        Err(CliError::Config(err)) => {
            output.result(&err.to_string());
            std::process::exit(1);
        }
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
