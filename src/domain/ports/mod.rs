//! Port trait definitions (Hexagonal Architecture)
//!
//! - RepositoryTracker: read access to issues, branches, comments and pull requests
//!
//! The checklist services depend only on these traits, never on a concrete
//! HTTP client.

pub mod tracker;

pub use tracker::RepositoryTracker;
