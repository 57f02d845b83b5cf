//! CLI type definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scanverify")]
#[command(
    about = "Verify that a repository completed the security scan checklist",
    long_about = "Queries the GitHub API for the main security issue, the security check \
branches, checkpoint issues, review comments and the follow-up pull request, then \
exits 0 when every check passes and 1 otherwise."
)]
#[command(version)]
pub struct Cli {
    /// Load configuration from this YAML file instead of .scanverify/
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output the report in JSON format
    #[arg(short, long)]
    pub json: bool,
}
