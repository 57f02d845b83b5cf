//! Domain models: configuration, tracker snapshots and the report.

pub mod config;
pub mod report;
pub mod tracker;

pub use config::{
    BranchesConfig, CheckpointsConfig, CommentsConfig, Config, GitHubConfig, LoggingConfig,
    MainIssueConfig, SecurityUpdateConfig,
};
pub use report::{CheckId, CheckOutcome, CheckResult, ReportSummary, ValidationReport};
pub use tracker::{Branch, Comment, Issue, ItemState, PullRequest};
