//! In-memory tracker for testing.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Branch, Comment, Issue, PullRequest};
use crate::domain::ports::RepositoryTracker;

/// The tracker listings, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerCall {
    /// `list_open_issues`
    OpenIssues,
    /// `list_branches`
    Branches,
    /// `list_issue_comments`
    IssueComments,
    /// `list_open_pull_requests`
    OpenPullRequests,
}

impl TrackerCall {
    const fn endpoint(self) -> &'static str {
        match self {
            Self::OpenIssues => "issues",
            Self::Branches => "branches",
            Self::IssueComments => "issues/comments",
            Self::OpenPullRequests => "pulls",
        }
    }
}

/// Mock tracker serving fixed data.
///
/// Listings honor the requested page size. Calls named through
/// [`fail_on`](MockTracker::fail_on) return a 503 error instead.
#[derive(Debug, Default)]
pub struct MockTracker {
    issues: Vec<Issue>,
    branches: Vec<Branch>,
    comments: HashMap<u64, Vec<Comment>>,
    pull_requests: Vec<PullRequest>,
    failing: HashSet<TrackerCall>,
    authenticated: bool,
    issue_listings: AtomicUsize,
}

impl MockTracker {
    /// Empty tracker: every listing returns nothing.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    #[must_use]
    pub fn with_branches<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = names
            .into_iter()
            .map(|name| Branch { name: name.into() })
            .collect();
        self
    }

    #[must_use]
    pub fn with_comments<I, S>(mut self, issue_number: u64, bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments.insert(
            issue_number,
            bodies
                .into_iter()
                .map(|body| Comment { body: body.into() })
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn with_pull_requests(mut self, pull_requests: Vec<PullRequest>) -> Self {
        self.pull_requests = pull_requests;
        self
    }

    /// Report the tracker as sending credentials.
    #[must_use]
    pub fn with_authentication(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Make every call of the given kind fail.
    #[must_use]
    pub fn fail_on(mut self, call: TrackerCall) -> Self {
        self.failing.insert(call);
        self
    }

    /// How many times the open-issue listing was requested.
    pub fn issue_listings(&self) -> usize {
        self.issue_listings.load(Ordering::SeqCst)
    }

    fn check(&self, call: TrackerCall) -> DomainResult<()> {
        if self.failing.contains(&call) {
            return Err(DomainError::UnexpectedStatus {
                endpoint: call.endpoint().to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

fn page<T: Clone>(items: &[T], per_page: u32) -> Vec<T> {
    items
        .iter()
        .take(usize::try_from(per_page).unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[async_trait]
impl RepositoryTracker for MockTracker {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    async fn list_open_issues(&self, per_page: u32) -> DomainResult<Vec<Issue>> {
        self.issue_listings.fetch_add(1, Ordering::SeqCst);
        self.check(TrackerCall::OpenIssues)?;
        Ok(page(&self.issues, per_page))
    }

    async fn list_branches(&self, per_page: u32) -> DomainResult<Vec<Branch>> {
        self.check(TrackerCall::Branches)?;
        Ok(page(&self.branches, per_page))
    }

    async fn list_issue_comments(&self, issue_number: u64) -> DomainResult<Vec<Comment>> {
        self.check(TrackerCall::IssueComments)?;
        Ok(self.comments.get(&issue_number).cloned().unwrap_or_default())
    }

    async fn list_open_pull_requests(&self, per_page: u32) -> DomainResult<Vec<PullRequest>> {
        self.check(TrackerCall::OpenPullRequests)?;
        Ok(page(&self.pull_requests, per_page))
    }
}
