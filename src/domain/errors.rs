//! Domain errors for the scanverify checklist validator.

use thiserror::Error;

/// Errors raised while talking to the repository tracker.
///
/// None of these abort a run: the validator folds each one into the
/// outcome of the check that needed the data.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The request never got a response.
    #[error("Request to {endpoint} failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    /// The API answered with something other than 200.
    #[error("API access may be restricted ({endpoint}): {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// The body was not the expected JSON.
    #[error("Failed to decode response from {endpoint}: {message}")]
    DecodeFailed { endpoint: String, message: String },

    /// The HTTP client could not be built.
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    /// The relative endpoint the failing call targeted, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { endpoint, .. }
            | Self::UnexpectedStatus { endpoint, .. }
            | Self::DecodeFailed { endpoint, .. } => Some(endpoint),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

/// Result alias for tracker operations.
pub type DomainResult<T> = Result<T, DomainError>;
