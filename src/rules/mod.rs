//! Built-in rules.
//!
//! Rules are the collaborators the guard engine evaluates: immutable
//! predicate + message objects attached to parameter and property
//! declarations in the metadata model. Anything implementing
//! [`Rule`](crate::foundation::Rule) works; this module ships the common
//! ones.
//!
//! # Absence convention
//!
//! Every *ordinary* rule here passes on an absent value (`Null`). Rejecting
//! absence is the job of the distinguished [`Required`] rule, whose failure
//! is classified separately. This is what makes
//! `required()` + `min_length(10)` behave correctly: a `null` sails past
//! the length rule and fails as missing-required, while `"hi"` fails the
//! length rule as an invalid value.

mod length;
mod nullable;
mod pattern;
mod range;

pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use nullable::{Required, required};
pub use pattern::{Matches, matches};
pub use range::{InRange, Max, Min, in_range, max, min};
