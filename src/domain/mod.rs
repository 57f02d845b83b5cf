//! Domain layer for the scanverify checklist validator
//!
//! Core models, errors and the tracker port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
