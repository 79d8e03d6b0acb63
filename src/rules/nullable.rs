//! The distinguished Required rule.
//!
//! `Required` is the only rule kind whose failure on an absent value is
//! classified as
//! [`MissingRequiredArgument`](crate::GuardError::MissingRequiredArgument)
//! instead of
//! [`InvalidArgumentValue`](crate::GuardError::InvalidArgumentValue).

use serde_json::Value;

use crate::foundation::Rule;

/// Validates that a value is present.
///
/// The guard engine checks [`is_required`](Rule::is_required) before
/// [`is_valid`](Rule::is_valid), so an absent value fails with the
/// missing-required classification; a present value always passes this
/// rule.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil::rules::required;
/// use vigil::foundation::Rule;
/// use serde_json::json;
///
/// assert!(required().is_valid(&json!("present")));
/// assert!(!required().is_valid(&serde_json::Value::Null));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required;

impl Rule for Required {
    fn is_valid(&self, value: &Value) -> bool {
        !value.is_null()
    }

    fn format_message(&self, subject: &str) -> String {
        format!("{subject} must not be null.")
    }

    fn is_required(&self) -> bool {
        true
    }
}

/// Creates a `Required` rule.
#[must_use]
pub const fn required() -> Required {
    Required
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_is_the_distinguished_kind() {
        assert!(required().is_required());
    }

    #[test]
    fn required_rejects_only_absence() {
        assert!(!required().is_valid(&Value::Null));
        assert!(required().is_valid(&serde_json::json!("")));
        assert!(required().is_valid(&serde_json::json!(0)));
        assert!(required().is_valid(&serde_json::json!(false)));
    }

    #[test]
    fn message_names_the_subject() {
        assert_eq!(
            required().format_message("The input argument"),
            "The input argument must not be null."
        );
    }
}
