//! Core types of the guard engine: the rule capability and the error
//! taxonomy.
//!
//! Everything else in the crate is built on these two pieces:
//!
//! - [`Rule`] — an immutable predicate + message formatter attached to a
//!   parameter or property declaration.
//! - [`GuardError`] — the single error enum, split into caller-misuse
//!   errors and validation failures.

pub mod error;
pub mod rule;

pub use error::GuardError;
pub use rule::{Rule, RuleList};

/// Result alias used throughout the guard engine.
pub type GuardResult<T> = Result<T, GuardError>;
