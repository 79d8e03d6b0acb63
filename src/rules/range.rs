//! Numeric range rules.
//!
//! Comparisons are performed after lowering to `f64`, which covers every
//! numeric value serde can capture. Ordinary-rule absence convention
//! applies: `Null` passes, a present non-numeric value fails.

use serde_json::Value;

fn num_rule(value: &Value, check: impl Fn(f64) -> bool) -> bool {
    match value {
        Value::Null => true,
        v => v.as_f64().is_some_and(check),
    }
}

crate::rule! {
    /// Validates that a numeric value is at least `min` (inclusive).
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 };
    valid(self, value) { num_rule(value, |n| n >= self.min) }
    message(self, subject) { format!("{subject} must be at least {}.", self.min) }
    fn min(min: f64);
}

crate::rule! {
    /// Validates that a numeric value is at most `max` (inclusive).
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 };
    valid(self, value) { num_rule(value, |n| n <= self.max) }
    message(self, subject) { format!("{subject} must be at most {}.", self.max) }
    fn max(max: f64);
}

crate::rule! {
    /// Validates that a numeric value lies in `[min, max]`.
    #[derive(Copy, PartialEq)]
    pub InRange { min: f64, max: f64 };
    valid(self, value) { num_rule(value, |n| n >= self.min && n <= self.max) }
    message(self, subject) {
        format!("{subject} must be between {} and {}.", self.min, self.max)
    }
    fn in_range(min: f64, max: f64);
}
