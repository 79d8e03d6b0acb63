//! Error taxonomy for the guard engine.
//!
//! Two families share one enum, and tests and callers must never confuse
//! them:
//!
//! - **Caller-misuse errors** ([`InvalidArgument`](GuardError::InvalidArgument),
//!   [`InvalidOperation`](GuardError::InvalidOperation),
//!   [`NotAReference`](GuardError::NotAReference)) mean the guard API itself
//!   was used incorrectly — a defect in the guarded method, not in its
//!   caller's data. They surface immediately and are not meant to be caught
//!   by application logic.
//! - **Validation failures**
//!   ([`MissingRequiredArgument`](GuardError::MissingRequiredArgument),
//!   [`InvalidArgumentValue`](GuardError::InvalidArgumentValue)) mean the
//!   caller of the guarded method passed a bad value. They propagate out of
//!   the guarded method exactly as if it had rejected the argument itself.
//!
//! Enforcement is fail-fast: the first violation wins, nothing is
//! aggregated, nothing is swallowed.

use thiserror::Error;

/// Error produced by [`guard`](crate::guard) and
/// [`Guard::argument`](crate::Guard::argument).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The guard API received an absent or unusable input
    /// (e.g. a missing method handle).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The guard API was driven into a state it forbids
    /// (e.g. guarding a setter parameter that is not the value parameter).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The checked name does not refer to a formal parameter of the
    /// guarded method.
    #[error("`{name}` is not a parameter of `{method}`")]
    NotAReference {
        /// The name the caller tried to guard.
        name: String,
        /// The guarded method, as `Type::method`.
        method: String,
    },

    /// A Required-kind rule saw an absent value.
    #[error("{message}")]
    MissingRequiredArgument {
        /// The offending parameter.
        param: String,
        /// Formatted subject + reason text.
        message: String,
    },

    /// An ordinary rule rejected a present value.
    #[error("{message}")]
    InvalidArgumentValue {
        /// The offending parameter.
        param: String,
        /// Formatted subject + reason text.
        message: String,
    },
}

impl GuardError {
    /// Whether this error reports a bad argument *value* (as opposed to a
    /// misuse of the guard API).
    #[must_use]
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredArgument { .. } | Self::InvalidArgumentValue { .. }
        )
    }

    /// Whether this error reports a misuse of the guard API itself.
    #[must_use]
    pub fn is_caller_misuse(&self) -> bool {
        !self.is_validation_failure()
    }

    /// The parameter a validation failure refers to, if any.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredArgument { param, .. }
            | Self::InvalidArgumentValue { param, .. } => Some(param),
            _ => None,
        }
    }
}
