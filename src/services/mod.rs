//! Checklist services: the rules and the validator that drives them.

pub mod checks;
pub mod validator;

pub use validator::ChecklistValidator;
