//! Check outcomes and the aggregated validation report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five checklist items, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// The labelled main security issue exists.
    MainIssue,
    /// Enough security check branches exist.
    Branches,
    /// Secondary issues cover enough checkpoints.
    Checkpoints,
    /// The main issue has a review discussion.
    Comments,
    /// A follow-up pull request is open.
    SecurityUpdate,
}

impl CheckId {
    /// Every check, in evaluation order.
    pub const ALL: [Self; 5] = [
        Self::MainIssue,
        Self::Branches,
        Self::Checkpoints,
        Self::Comments,
        Self::SecurityUpdate,
    ];

    /// Human-readable name used in section headers.
    pub const fn description(self) -> &'static str {
        match self {
            Self::MainIssue => "main security issue",
            Self::Branches => "security check branches",
            Self::Checkpoints => "security checkpoints",
            Self::Comments => "main issue comments",
            Self::SecurityUpdate => "security update pull request",
        }
    }
}

/// Result of evaluating one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The check passed; `detail` says what was found.
    Passed { detail: String },
    /// The check failed; `reason` says why.
    Failed { reason: String },
    /// Not evaluated because a prerequisite was missing. Counts as a failure.
    Skipped { reason: String },
    /// Turned off in configuration. Does not affect the overall result.
    Disabled,
}

impl CheckOutcome {
    /// Passed with the given detail.
    pub fn passed(detail: impl Into<String>) -> Self {
        Self::Passed {
            detail: detail.into(),
        }
    }

    /// Failed with the given reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Skipped with the given reason.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Whether the check actually passed.
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// Whether this outcome lets the overall run pass.
    pub const fn is_acceptable(&self) -> bool {
        matches!(self, Self::Passed { .. } | Self::Disabled)
    }
}

/// One entry of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which check this is.
    pub id: CheckId,
    /// What it concluded.
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Per-status tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Checks that passed.
    pub passed: u32,
    /// Checks that failed.
    pub failed: u32,
    /// Checks skipped for a missing prerequisite.
    pub skipped: u32,
    /// Checks turned off in configuration.
    pub disabled: u32,
}

/// Aggregated outcome of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `organization/repository`
    pub repository: String,
    /// Whether API requests carried a token.
    pub authenticated: bool,
    /// Number of the discovered main issue
    pub main_issue: Option<u64>,
    /// Outcomes in evaluation order.
    pub checks: Vec<CheckResult>,
    /// When the run started.
    pub generated_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Start an empty report for `repository`.
    pub fn new(repository: impl Into<String>, authenticated: bool) -> Self {
        Self {
            repository: repository.into(),
            authenticated,
            main_issue: None,
            checks: Vec::with_capacity(CheckId::ALL.len()),
            generated_at: Utc::now(),
        }
    }

    /// Append an outcome.
    pub fn record(&mut self, id: CheckId, outcome: CheckOutcome) {
        self.checks.push(CheckResult { id, outcome });
    }

    /// Outcome recorded for `id`, if it ran.
    pub fn outcome(&self, id: CheckId) -> Option<&CheckOutcome> {
        self.checks.iter().find(|c| c.id == id).map(|c| &c.outcome)
    }

    /// True when every recorded check passed or was disabled.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.outcome.is_acceptable())
    }

    /// Process exit code: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Count outcomes by status.
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for check in &self.checks {
            match check.outcome {
                CheckOutcome::Passed { .. } => summary.passed += 1,
                CheckOutcome::Failed { .. } => summary.failed += 1,
                CheckOutcome::Skipped { .. } => summary.skipped += 1,
                CheckOutcome::Disabled => summary.disabled += 1,
            }
        }
        summary
    }
}
