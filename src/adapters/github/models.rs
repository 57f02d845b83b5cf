//! GitHub REST API v3 response models.
//!
//! Only the fields the checklist reads are mapped. Text fields that may be
//! absent or `null` fall back to empty strings when converted to domain
//! models.

use serde::Deserialize;

use crate::domain::models::{Branch, Comment, Issue, ItemState, PullRequest};

/// An issue returned by `GET /repos/{owner}/{repo}/issues`.
///
/// Note: this endpoint also returns pull requests. They are not filtered
/// out; the checklist scans the listing as returned.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository.
    pub number: u64,
    /// Issue title.
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub body: Option<String>,
    /// "open" or "closed".
    #[serde(default)]
    pub state: Option<String>,
    /// Applied labels.
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
}

/// A label applied to an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubLabel {
    /// Label name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A branch returned by `GET /repos/{owner}/{repo}/branches`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubBranch {
    /// Branch name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A comment returned by `GET /repos/{owner}/{repo}/issues/{n}/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubComment {
    /// Markdown text.
    #[serde(default)]
    pub body: Option<String>,
}

/// A pull request returned by `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubPullRequest {
    /// Sequential number within the repository.
    pub number: u64,
    /// Pull request title.
    #[serde(default)]
    pub title: Option<String>,
    /// "open" or "closed".
    #[serde(default)]
    pub state: Option<String>,
    /// Source branch reference.
    #[serde(default)]
    pub head: Option<GitHubBranchRef>,
}

/// The `head` / `base` object of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubBranchRef {
    /// Branch name.
    #[serde(rename = "ref", default)]
    pub ref_name: Option<String>,
}

impl From<GitHubIssue> for Issue {
    fn from(issue: GitHubIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title.unwrap_or_default(),
            body: issue.body.unwrap_or_default(),
            state: ItemState::from_api(issue.state.as_deref().unwrap_or("open")),
            labels: issue
                .labels
                .into_iter()
                .map(|label| label.name.unwrap_or_default())
                .collect(),
        }
    }
}

impl From<GitHubBranch> for Branch {
    fn from(branch: GitHubBranch) -> Self {
        Self {
            name: branch.name.unwrap_or_default(),
        }
    }
}

impl From<GitHubComment> for Comment {
    fn from(comment: GitHubComment) -> Self {
        Self {
            body: comment.body.unwrap_or_default(),
        }
    }
}

impl From<GitHubPullRequest> for PullRequest {
    fn from(pr: GitHubPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            head_branch: pr.head.and_then(|head| head.ref_name).unwrap_or_default(),
            state: ItemState::from_api(pr.state.as_deref().unwrap_or("open")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_issue_conversion() {
        let json = r#"{
            "id": 1,
            "number": 42,
            "title": "安全漏洞扫描",
            "body": "Track the scan.",
            "state": "open",
            "labels": [
                { "name": "安全", "color": "d73a4a" },
                { "name": "漏洞", "color": "e4e669" }
            ],
            "pull_request": null,
            "html_url": "https://github.com/org/repo/issues/42"
        }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.title, "安全漏洞扫描");
        assert_eq!(issue.state, ItemState::Open);
        assert!(issue.labels.contains("安全"));
        assert!(issue.labels.contains("漏洞"));
        assert_eq!(issue.labels.len(), 2);
    }

    #[test]
    fn test_null_body_becomes_empty() {
        let json = r#"{ "number": 1, "title": "Minimal", "body": null, "state": "closed" }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert_eq!(issue.body, "");
        assert!(issue.labels.is_empty());
        assert_eq!(issue.state, ItemState::Closed);
    }

    #[test]
    fn test_pull_request_head_ref() {
        let json = r#"{
            "number": 7,
            "title": "安全更新：基础漏洞修复",
            "state": "open",
            "head": { "ref": "security-scan", "sha": "abc123" },
            "base": { "ref": "main" }
        }"#;
        let pr: PullRequest = serde_json::from_str::<GitHubPullRequest>(json)
            .unwrap()
            .into();
        assert_eq!(pr.number, 7);
        assert_eq!(pr.head_branch, "security-scan");
    }

    #[test]
    fn test_pull_request_without_head() {
        let json = r#"{ "number": 8, "title": "Orphan" }"#;
        let pr: PullRequest = serde_json::from_str::<GitHubPullRequest>(json)
            .unwrap()
            .into();
        assert_eq!(pr.head_branch, "");
        assert_eq!(pr.state, ItemState::Open);
    }

    #[test]
    fn test_comment_null_body() {
        let comment: Comment = serde_json::from_str::<GitHubComment>(r#"{ "body": null }"#)
            .unwrap()
            .into();
        assert_eq!(comment.body, "");
    }
}
