//! Scanverify - security scan checklist verifier
//!
//! Checks a GitHub repository for the artifacts of a completed security scan
//! exercise: a labelled main issue, the security check branches, checkpoint
//! issues, review comments on the main issue and a follow-up pull request.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and the `RepositoryTracker` port
//! - **Adapters** (`adapters`): the GitHub REST client and an in-memory tracker
//! - **Service Layer** (`services`): the check rules and the validator
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): argument parsing and report rendering
//!
//! # Example
//!
//! ```ignore
//! use scanverify::{ChecklistValidator, ConfigLoader, GitHubClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let client = GitHubClient::from_env(&config.github)?;
//!     let report = ChecklistValidator::new(client, config).run().await;
//!     std::process::exit(report.exit_code());
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::github::GitHubClient;
pub use adapters::mock::MockTracker;
pub use domain::models::{
    CheckId, CheckOutcome, CheckResult, Config, LoggingConfig, ValidationReport,
};
pub use domain::ports::RepositoryTracker;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ChecklistValidator;
