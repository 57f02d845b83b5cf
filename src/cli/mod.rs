//! Command-line entry: load configuration, run the checklist, print the report.

pub mod output;
pub mod types;

use anyhow::{Context, Result};
use console::style;

use crate::adapters::github::GitHubClient;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LoggerImpl, SecretScrubber};
use crate::services::ChecklistValidator;

pub use output::{output, CommandOutput};
pub use types::Cli;

/// Run one validation and return the process exit code.
///
/// Errors are reserved for setup problems (configuration, logging, HTTP
/// client construction). API failures end up in the report instead.
pub async fn execute(cli: &Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    // Held until the report is printed so the file writer flushes.
    let _logger = LoggerImpl::init(&config.logging).context("Failed to initialize logging")?;

    let client = GitHubClient::from_env(&config.github).context("Failed to create GitHub client")?;
    let report = ChecklistValidator::new(client, config).run().await;

    output(&report, cli.json);
    Ok(report.exit_code())
}

/// Print a setup error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
    if json {
        let body = serde_json::json!({ "error": message });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {message}", style("[ERROR]").red().bold());
    }
    std::process::exit(1)
}
