//! Regex pattern rule.
//!
//! Hand-written rather than going through [`rule!`](crate::rule) because
//! regex compilation makes the constructor fallible.

use regex::Regex;
use serde_json::Value;

use crate::foundation::Rule;

/// Validates that a string value matches a regular expression.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil::rules::matches;
/// use vigil::foundation::Rule;
/// use serde_json::json;
///
/// let hex = matches(r"^[0-9a-f]+$")?;
/// assert!(hex.is_valid(&json!("deadbeef")));
/// assert!(!hex.is_valid(&json!("nope!")));
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    /// Compiles the pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Rule for Matches {
    fn is_valid(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => self.pattern.is_match(s),
            _ => false,
        }
    }

    fn format_message(&self, subject: &str) -> String {
        format!("{subject} must match the pattern `{}`.", self.pattern)
    }
}

/// Creates a `Matches` rule from a regex pattern.
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Matches::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_strings_against_the_pattern() {
        let rule = matches(r"^\d{4}$").unwrap();
        assert!(rule.is_valid(&json!("2026")));
        assert!(!rule.is_valid(&json!("26")));
    }

    #[test]
    fn absent_passes_non_string_fails() {
        let rule = matches(r".*").unwrap();
        assert!(rule.is_valid(&Value::Null));
        assert!(!rule.is_valid(&json!(1234)));
    }

    #[test]
    fn invalid_pattern_is_a_constructor_error() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn message_embeds_the_pattern() {
        let rule = matches("^x$").unwrap();
        assert_eq!(
            rule.format_message("The tag argument"),
            "The tag argument must match the pattern `^x$`."
        );
    }
}
