//! GitHub REST adapter.
//!
//! Read-only access to the issues, branches, comments and pull requests of
//! a single repository.

pub mod client;
pub mod models;

pub use client::GitHubClient;
