//! The tracker port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Branch, Comment, Issue, PullRequest};

/// Read-only access to one repository on an issue/branch/pull-request tracker.
///
/// Every call is a single request with no retry. Implementations report
/// unreachable hosts, non-success statuses and undecodable bodies as
/// [`DomainError`](crate::domain::errors::DomainError).
#[async_trait]
pub trait RepositoryTracker: Send + Sync {
    /// Whether requests carry credentials.
    fn is_authenticated(&self) -> bool;

    /// List open issues, at most `per_page` of them.
    async fn list_open_issues(&self, per_page: u32) -> DomainResult<Vec<Issue>>;

    /// List branches, at most `per_page` of them.
    async fn list_branches(&self, per_page: u32) -> DomainResult<Vec<Branch>>;

    /// List the comments on an issue.
    async fn list_issue_comments(&self, issue_number: u64) -> DomainResult<Vec<Comment>>;

    /// List open pull requests, at most `per_page` of them.
    async fn list_open_pull_requests(&self, per_page: u32) -> DomainResult<Vec<PullRequest>>;
}
