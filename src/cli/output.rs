//! Output formatting utilities for the CLI.

use console::style;
use serde::Serialize;

use crate::domain::models::{CheckOutcome, ValidationReport};

/// Width of the summary banner rule.
const BANNER_WIDTH: usize = 50;

/// A command result that can be printed for people or for machines.
pub trait CommandOutput: Serialize {
    /// Styled, line-oriented text.
    fn to_human(&self) -> String;
    /// JSON document printed under `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected format.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

fn info(text: &str) -> String {
    format!("{} {text}", style("[INFO]").cyan())
}

fn ok(text: &str) -> String {
    format!("{} {text}", style("[OK]").green().bold())
}

fn warning(text: &str) -> String {
    format!("{} {text}", style("[WARNING]").yellow().bold())
}

impl CommandOutput for ValidationReport {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if !self.authenticated {
            lines.push(warning(
                "no API token configured, requests are unauthenticated and may be rate limited",
            ));
        }
        lines.push(info(&format!("validating {}", self.repository)));

        for check in &self.checks {
            lines.push(String::new());
            lines.push(info(&format!("checking {}...", check.id.description())));
            lines.push(match &check.outcome {
                CheckOutcome::Passed { detail } => ok(detail),
                CheckOutcome::Failed { reason } => warning(reason),
                CheckOutcome::Skipped { reason } => warning(&format!("skipped: {reason}")),
                CheckOutcome::Disabled => info("disabled in configuration"),
            });
        }

        let summary = self.summary();
        lines.push(String::new());
        lines.push("=".repeat(BANNER_WIDTH));
        if self.all_passed() {
            lines.push(format!(
                "{} all checklist items completed ({} passed)",
                style("[SUCCESS]").green().bold(),
                summary.passed
            ));
        } else {
            lines.push(warning(&format!(
                "checklist incomplete: {} passed, {} failed, {} skipped",
                summary.passed, summary.failed, summary.skipped
            )));
        }
        lines.push("=".repeat(BANNER_WIDTH));

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "repository": self.repository,
            "authenticated": self.authenticated,
            "main_issue": self.main_issue,
            "passed": self.all_passed(),
            "exit_code": self.exit_code(),
            "summary": self.summary(),
            "checks": self.checks,
            "generated_at": self.generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CheckId;

    fn plain(report: &ValidationReport) -> String {
        console::strip_ansi_codes(&report.to_human()).into_owned()
    }

    fn passing_report() -> ValidationReport {
        let mut report = ValidationReport::new("acme/chatbot", true);
        report.main_issue = Some(1);
        report.record(CheckId::MainIssue, CheckOutcome::passed("found main security issue #1"));
        report.record(
            CheckId::Branches,
            CheckOutcome::passed("found 2 security check branches: security-scan, privacy-check"),
        );
        report.record(CheckId::SecurityUpdate, CheckOutcome::Disabled);
        report
    }

    #[test]
    fn test_human_output_passing() {
        let text = plain(&passing_report());

        assert!(text.contains("[INFO] checking main security issue..."));
        assert!(text.contains("[OK] found main security issue #1"));
        assert!(text.contains("[INFO] disabled in configuration"));
        assert!(text.contains("[SUCCESS] all checklist items completed (2 passed)"));
        assert!(!text.contains("unauthenticated"));
        assert!(text.contains(&"=".repeat(50)));
    }

    #[test]
    fn test_human_output_failing() {
        let mut report = ValidationReport::new("acme/chatbot", false);
        report.record(CheckId::MainIssue, CheckOutcome::failed("main security issue not found"));
        report.record(CheckId::Checkpoints, CheckOutcome::skipped("main security issue not found"));
        let text = plain(&report);

        assert!(text.starts_with("[WARNING] no API token configured"));
        assert!(text.contains("[WARNING] main security issue not found"));
        assert!(text.contains("[WARNING] skipped: main security issue not found"));
        assert!(text.contains("[WARNING] checklist incomplete: 0 passed, 1 failed, 1 skipped"));
        assert!(!text.contains("[SUCCESS]"));
    }

    #[test]
    fn test_json_output() {
        let json = passing_report().to_json();

        assert_eq!(json["repository"], "acme/chatbot");
        assert_eq!(json["passed"], true);
        assert_eq!(json["exit_code"], 0);
        assert_eq!(json["main_issue"], 1);
        assert_eq!(json["summary"]["disabled"], 1);
        assert_eq!(json["checks"][0]["id"], "main_issue");
        assert_eq!(json["checks"][0]["status"], "passed");
        assert_eq!(json["checks"][2]["status"], "disabled");
    }
}
