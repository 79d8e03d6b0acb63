//! String length rules.
//!
//! Length is measured in Unicode scalar values (chars), not bytes.
//!
//! Like every ordinary rule, these pass on an absent value — pair with
//! [`required`](crate::rules::required) to also reject absence. A present
//! value that is not a string fails.

use serde_json::Value;

fn str_rule(value: &Value, check: impl Fn(&str) -> bool) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => check(s),
        _ => false,
    }
}

crate::rule! {
    /// Validates that a string value is not empty.
    ///
    /// Equivalent to `MinLength::new(1)` but more semantic.
    pub NotEmpty;
    valid(value) { str_rule(value, |s| !s.is_empty()) }
    message(subject) { format!("{subject} must not be empty.") }
    fn not_empty();
}

crate::rule! {
    /// Validates that a string value has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    valid(self, value) { str_rule(value, |s| s.chars().count() >= self.min) }
    message(self, subject) {
        format!("{subject} must be at least {} characters long.", self.min)
    }
    fn min_length(min: usize);
}

crate::rule! {
    /// Validates that a string value does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    valid(self, value) { str_rule(value, |s| s.chars().count() <= self.max) }
    message(self, subject) {
        format!("{subject} must be at most {} characters long.", self.max)
    }
    fn max_length(max: usize);
}
