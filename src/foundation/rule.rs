//! Rule model: the capability every validation rule implements.
//!
//! A [`Rule`] is an immutable predicate plus a message formatter, attached
//! declaratively to a parameter or property declaration in the metadata
//! model. Rules never mutate state and are shared behind `Arc`, so one rule
//! instance can safely back concurrent read-only evaluations.
//!
//! # Absence convention
//!
//! An absent value (what `Option::<T>::None` captures as) is represented by
//! [`Value::Null`]. Ordinary rules treat an absent value as *passing* — only
//! the distinguished Required kind (see [`is_required`](Rule::is_required))
//! rejects absence, and its failure is classified separately as
//! [`MissingRequiredArgument`](crate::GuardError::MissingRequiredArgument).
//! This is what lets a `null` flow past a length rule and reach the Required
//! rule that owns the absence decision.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A declarative validation rule for a single argument or property value.
///
/// Implementations must be pure: [`is_valid`](Rule::is_valid) may not
/// observe or mutate anything beyond the rule's own configuration and the
/// value under test.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil::foundation::Rule;
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct Positive;
///
/// impl Rule for Positive {
///     fn is_valid(&self, value: &Value) -> bool {
///         match value {
///             Value::Null => true,
///             v => v.as_f64().is_some_and(|n| n > 0.0),
///         }
///     }
///
///     fn format_message(&self, subject: &str) -> String {
///         format!("{subject} must be positive.")
///     }
/// }
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Evaluates the rule against a captured argument value.
    fn is_valid(&self, value: &Value) -> bool;

    /// Formats the human-readable failure text for this rule.
    ///
    /// `subject` is the already-built description of what is being checked,
    /// e.g. `"The count argument"` or `"The new Timeout value"`.
    fn format_message(&self, subject: &str) -> String;

    /// Whether this is the distinguished Required kind.
    ///
    /// Required rules seeing an absent value fail with
    /// `MissingRequiredArgument` instead of `InvalidArgumentValue`.
    fn is_required(&self) -> bool {
        false
    }
}

/// Ordered rules attached to one declaration site.
///
/// Attachment order is evaluation order within that site.
pub type RuleList = Vec<Arc<dyn Rule>>;
