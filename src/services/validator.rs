//! Checklist validator.
//!
//! Fetches each listing in turn from a [`RepositoryTracker`], hands the
//! snapshot to the matching rule in [`checks`](super::checks), and records
//! every outcome in a [`ValidationReport`]. A failed fetch only fails the
//! check that needed it.

use tracing::{info, instrument, warn};

use crate::domain::errors::DomainError;
use crate::domain::models::{CheckId, CheckOutcome, Config, ValidationReport};
use crate::domain::ports::RepositoryTracker;
use crate::infrastructure::logging::SecretScrubber;

use super::checks;

/// Reason recorded for checks that depend on the main issue.
const NO_MAIN_ISSUE: &str = "main security issue not found";

/// Runs the five checks against one repository, sequentially.
pub struct ChecklistValidator<T> {
    tracker: T,
    config: Config,
    scrubber: SecretScrubber,
}

impl<T: RepositoryTracker> ChecklistValidator<T> {
    /// Validator over `tracker` using the rules in `config`.
    pub fn new(tracker: T, config: Config) -> Self {
        Self {
            tracker,
            config,
            scrubber: SecretScrubber::new(),
        }
    }

    /// The tracker the checks read from.
    pub const fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Run every check and aggregate the outcomes.
    ///
    /// Never fails: API errors become failed checks.
    #[instrument(skip(self), fields(
        repository = %format!("{}/{}", self.config.github.organization, self.config.github.repository)
    ))]
    pub async fn run(&self) -> ValidationReport {
        let github = &self.config.github;
        let mut report = ValidationReport::new(
            format!("{}/{}", github.organization, github.repository),
            self.tracker.is_authenticated(),
        );

        let (outcome, main_issue) = self.main_issue().await;
        record(&mut report, CheckId::MainIssue, outcome);
        report.main_issue = main_issue;

        let outcome = self.branches().await;
        record(&mut report, CheckId::Branches, outcome);

        let outcome = match main_issue {
            Some(number) => self.checkpoints(number).await,
            None => CheckOutcome::skipped(NO_MAIN_ISSUE),
        };
        record(&mut report, CheckId::Checkpoints, outcome);

        let outcome = match main_issue {
            Some(number) => self.comments(number).await,
            None => CheckOutcome::skipped(NO_MAIN_ISSUE),
        };
        record(&mut report, CheckId::Comments, outcome);

        let outcome = if self.config.security_update.required {
            self.security_update().await
        } else {
            CheckOutcome::Disabled
        };
        record(&mut report, CheckId::SecurityUpdate, outcome);

        info!(
            passed = report.all_passed(),
            main_issue = ?report.main_issue,
            "validation finished"
        );
        report
    }

    async fn main_issue(&self) -> (CheckOutcome, Option<u64>) {
        let config = &self.config.main_issue;
        match self.tracker.list_open_issues(config.per_page).await {
            Ok(issues) => checks::check_main_issue(&issues, config),
            Err(err) => (self.fetch_failed(&err), None),
        }
    }

    async fn branches(&self) -> CheckOutcome {
        let config = &self.config.branches;
        match self.tracker.list_branches(config.per_page).await {
            Ok(branches) => checks::check_branches(&branches, config),
            Err(err) => self.fetch_failed(&err),
        }
    }

    /// Re-fetches the open issues rather than reusing the first listing.
    async fn checkpoints(&self, main_issue: u64) -> CheckOutcome {
        let per_page = self.config.main_issue.per_page;
        match self.tracker.list_open_issues(per_page).await {
            Ok(issues) => checks::check_checkpoints(&issues, main_issue, &self.config.checkpoints),
            Err(err) => self.fetch_failed(&err),
        }
    }

    async fn comments(&self, main_issue: u64) -> CheckOutcome {
        match self.tracker.list_issue_comments(main_issue).await {
            Ok(comments) => checks::check_comments(&comments, &self.config.comments),
            Err(err) => self.fetch_failed(&err),
        }
    }

    async fn security_update(&self) -> CheckOutcome {
        let config = &self.config.security_update;
        match self.tracker.list_open_pull_requests(config.per_page).await {
            Ok(pulls) => checks::check_security_update(&pulls, config),
            Err(err) => self.fetch_failed(&err),
        }
    }

    fn fetch_failed(&self, err: &DomainError) -> CheckOutcome {
        let message = self.scrubber.scrub_message(&err.to_string());
        warn!(endpoint = err.endpoint().unwrap_or_default(), error = %message, "API call failed");
        CheckOutcome::failed(message)
    }
}

/// Log an outcome and append it to the report.
fn record(report: &mut ValidationReport, id: CheckId, outcome: CheckOutcome) {
    match &outcome {
        CheckOutcome::Passed { detail } => info!(check = ?id, %detail, "check passed"),
        CheckOutcome::Failed { reason } => warn!(check = ?id, %reason, "check failed"),
        CheckOutcome::Skipped { reason } => warn!(check = ?id, %reason, "check skipped"),
        CheckOutcome::Disabled => info!(check = ?id, "check disabled"),
    }
    report.record(id, outcome);
}
