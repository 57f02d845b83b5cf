//! Read-only views of the tracker items the checklist inspects.
//!
//! These are decoupled from the GitHub wire format so the checks can be
//! exercised against any [`RepositoryTracker`](crate::domain::ports::RepositoryTracker).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Open/closed state shared by issues and pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    /// Still open.
    Open,
    /// Closed or merged.
    Closed,
}

impl ItemState {
    /// Parse the API's state string. Anything other than `closed` is open.
    pub fn from_api(state: &str) -> Self {
        if state.eq_ignore_ascii_case("closed") {
            Self::Closed
        } else {
            Self::Open
        }
    }
}

/// An issue in the tracked repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Sequential number within the repository.
    pub number: u64,
    /// Empty when the API sent none.
    pub title: String,
    /// Empty when the issue has no description.
    pub body: String,
    /// Open or closed.
    pub state: ItemState,
    /// Names of the applied labels.
    pub labels: HashSet<String>,
}

impl Issue {
    /// Title and body joined by a single space, the text searched for
    /// checkpoint keywords.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// A branch in the tracked repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Branch name without the `refs/heads/` prefix.
    pub name: String,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Markdown text of the comment.
    pub body: String,
}

/// A pull request in the tracked repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Sequential number within the repository.
    pub number: u64,
    /// Empty when the API sent none.
    pub title: String,
    /// Name of the source branch (`head.ref`).
    pub head_branch: String,
    /// Open or closed.
    pub state: ItemState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_state_from_api() {
        assert_eq!(ItemState::from_api("open"), ItemState::Open);
        assert_eq!(ItemState::from_api("closed"), ItemState::Closed);
        assert_eq!(ItemState::from_api("CLOSED"), ItemState::Closed);
        assert_eq!(ItemState::from_api(""), ItemState::Open);
    }

    #[test]
    fn test_searchable_text_joins_title_and_body() {
        let issue = Issue {
            number: 3,
            title: "检查点".to_string(),
            body: "权限验证".to_string(),
            state: ItemState::Open,
            labels: HashSet::new(),
        };
        assert_eq!(issue.searchable_text(), "检查点 权限验证");
    }
}
