//! GitHub HTTP client for the checklist.
//!
//! Wraps the handful of read-only REST API v3 listings the checks need.
//! Every call is a single GET with the configured timeout; there is no
//! retry and no pagination beyond the requested page size.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Branch, Comment, GitHubConfig, Issue, PullRequest};
use crate::domain::ports::RepositoryTracker;

use super::models::{GitHubBranch, GitHubComment, GitHubIssue, GitHubPullRequest};

/// Media type requested on every call.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a user agent.
const USER_AGENT: &str = concat!("scanverify/", env!("CARGO_PKG_VERSION"));

/// HTTP client scoped to one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// `{api_base}/repos/{organization}/{repository}`
    repo_url: String,
    /// Personal access token; requests are anonymous when absent.
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for the configured repository.
    pub fn new(config: &GitHubConfig, token: Option<String>) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::InvalidConfiguration(format!("HTTP client: {e}")))?;

        let repo_url = format!(
            "{}/repos/{}/{}",
            config.api_base.trim_end_matches('/'),
            config.organization,
            config.repository
        );

        Ok(Self {
            http,
            repo_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Create a client, reading the token from the variable named by
    /// `config.token_env_var`.
    ///
    /// An unset or empty variable is tolerated: a warning is logged and
    /// requests go out unauthenticated.
    pub fn from_env(config: &GitHubConfig) -> DomainResult<Self> {
        let token = std::env::var(&config.token_env_var)
            .ok()
            .filter(|t| !t.is_empty());
        if token.is_none() {
            warn!(
                variable = %config.token_env_var,
                "token variable not set, using unauthenticated access"
            );
        }
        Self::new(config, token)
    }

    /// Base URL all endpoints are relative to.
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// GET `endpoint` (relative to the repository URL) and decode the body.
    ///
    /// Only `200 OK` counts as success.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> DomainResult<T> {
        let url = format!("{}/{}", self.repo_url, endpoint);
        debug!(%endpoint, "calling GitHub API");

        let mut request = self.http.get(&url).header("Accept", ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {token}"));
        }

        let resp = request.send().await.map_err(|e| DomainError::RequestFailed {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(DomainError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| DomainError::DecodeFailed {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RepositoryTracker for GitHubClient {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn list_open_issues(&self, per_page: u32) -> DomainResult<Vec<Issue>> {
        let issues: Vec<GitHubIssue> = self
            .get_json(&format!("issues?state=open&per_page={per_page}"))
            .await?;
        Ok(issues.into_iter().map(Issue::from).collect())
    }

    async fn list_branches(&self, per_page: u32) -> DomainResult<Vec<Branch>> {
        let branches: Vec<GitHubBranch> = self
            .get_json(&format!("branches?per_page={per_page}"))
            .await?;
        Ok(branches.into_iter().map(Branch::from).collect())
    }

    async fn list_issue_comments(&self, issue_number: u64) -> DomainResult<Vec<Comment>> {
        let comments: Vec<GitHubComment> = self
            .get_json(&format!("issues/{issue_number}/comments"))
            .await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn list_open_pull_requests(&self, per_page: u32) -> DomainResult<Vec<PullRequest>> {
        let pulls: Vec<GitHubPullRequest> = self
            .get_json(&format!("pulls?state=open&per_page={per_page}"))
            .await?;
        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }
}
