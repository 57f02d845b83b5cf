//! The five checklist rules as pure functions over fetched data.
//!
//! Nothing here touches the network or the console. Each function takes a
//! snapshot of tracker items plus its configuration section and returns a
//! [`CheckOutcome`].

use std::collections::HashSet;

use crate::domain::models::{
    Branch, BranchesConfig, CheckOutcome, CheckpointsConfig, Comment, CommentsConfig, Issue,
    MainIssueConfig, PullRequest, SecurityUpdateConfig,
};

/// Title rule shared by the main issue and the follow-up pull request.
///
/// In exact mode the title must equal `expected`. Otherwise it must contain
/// at least one of `markers`.
pub fn title_matches(title: &str, exact: bool, expected: &str, markers: &[String]) -> bool {
    if exact {
        title == expected
    } else {
        markers.iter().any(|marker| title.contains(marker.as_str()))
    }
}

/// Label rule for the main issue.
///
/// With `require_all` the issue must carry every required label. Otherwise
/// at least `min_matching` distinct required labels must be present.
pub fn labels_match(
    labels: &HashSet<String>,
    required: &[String],
    require_all: bool,
    min_matching: usize,
) -> bool {
    let required: HashSet<&str> = required.iter().map(String::as_str).collect();
    if require_all {
        required.iter().all(|label| labels.contains(*label))
    } else {
        required
            .iter()
            .filter(|label| labels.contains(**label))
            .count()
            >= min_matching
    }
}

/// First issue whose title and labels both satisfy the main issue rules.
pub fn find_main_issue<'a>(issues: &'a [Issue], config: &MainIssueConfig) -> Option<&'a Issue> {
    issues.iter().find(|issue| {
        title_matches(
            &issue.title,
            config.exact_title_match,
            &config.title,
            &config.title_markers,
        ) && labels_match(
            &issue.labels,
            &config.required_labels,
            config.require_all_labels,
            config.min_matching_labels,
        )
    })
}

/// Check 1: the main security issue exists.
pub fn check_main_issue(issues: &[Issue], config: &MainIssueConfig) -> (CheckOutcome, Option<u64>) {
    match find_main_issue(issues, config) {
        Some(issue) => (
            CheckOutcome::passed(format!("found main security issue #{}", issue.number)),
            Some(issue.number),
        ),
        None => (
            CheckOutcome::failed("no open issue matches the main security issue rules"),
            None,
        ),
    }
}

/// Entries of `wanted` for which `present` holds, without duplicates and in
/// `wanted` order.
fn present_in_order<'a>(wanted: &'a [String], present: impl Fn(&str) -> bool) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    wanted
        .iter()
        .map(String::as_str)
        .filter(|item| present(*item) && seen.insert(*item))
        .collect()
}

/// Check 2: enough of the required branches exist.
pub fn check_branches(branches: &[Branch], config: &BranchesConfig) -> CheckOutcome {
    let existing: HashSet<&str> = branches.iter().map(|b| b.name.as_str()).collect();
    let found = present_in_order(&config.required, |name| existing.contains(name));

    if found.len() >= config.min_branches {
        CheckOutcome::passed(format!(
            "found {} security check branches: {}",
            found.len(),
            found.join(", ")
        ))
    } else {
        CheckOutcome::failed(format!(
            "not enough security check branches: need {}, found {}",
            config.min_branches,
            found.len()
        ))
    }
}

/// Check 3: the other open issues mention enough distinct checkpoints.
///
/// The main issue itself is never scanned.
pub fn check_checkpoints(
    issues: &[Issue],
    main_issue: u64,
    config: &CheckpointsConfig,
) -> CheckOutcome {
    let texts: Vec<String> = issues
        .iter()
        .filter(|issue| issue.number != main_issue)
        .map(Issue::searchable_text)
        .collect();

    let found = present_in_order(&config.keywords, |keyword| {
        texts.iter().any(|text| text.contains(keyword))
    });

    if found.len() >= config.min_checkpoints {
        CheckOutcome::passed(format!(
            "found {} security checkpoints: {}",
            found.len(),
            found.join(", ")
        ))
    } else {
        CheckOutcome::failed(format!(
            "not enough security checkpoints: need {}, found {}",
            config.min_checkpoints,
            found.len()
        ))
    }
}

/// Check 4: the main issue has enough comments and they reference at least
/// one required keyword.
pub fn check_comments(comments: &[Comment], config: &CommentsConfig) -> CheckOutcome {
    if comments.len() < config.min_comments {
        return CheckOutcome::failed(format!(
            "not enough comments: need {}, found {}",
            config.min_comments,
            comments.len()
        ));
    }

    let all_text = comments
        .iter()
        .map(|c| c.body.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let found = present_in_order(&config.required_keywords, |keyword| {
        all_text.contains(keyword)
    });

    if found.is_empty() {
        CheckOutcome::failed("no required keyword found in comments")
    } else {
        CheckOutcome::passed(format!("comments mention: {}", found.join(", ")))
    }
}

/// Check 5: an open pull request with a matching title comes from the
/// expected branch.
pub fn check_security_update(
    pull_requests: &[PullRequest],
    config: &SecurityUpdateConfig,
) -> CheckOutcome {
    let matching = pull_requests.iter().find(|pr| {
        title_matches(
            &pr.title,
            config.exact_title_match,
            &config.title,
            &config.title_markers,
        ) && pr.head_branch == config.source_branch
    });

    match matching {
        Some(pr) => CheckOutcome::passed(format!(
            "found security update PR #{}: '{}'",
            pr.number, pr.title
        )),
        None => CheckOutcome::failed(format!(
            "no open pull request from '{}' matches the security update rules",
            config.source_branch
        )),
    }
}
