//! Macros for declaring rules and binding arguments with minimal
//! boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`](crate::rule) — Create a complete rule (struct + `Rule` impl +
//!   factory fn)
//! - [`argument!`](crate::argument) — Guard an argument by referencing the
//!   local instead of repeating its name as a string
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil::rule;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub NotEmpty;
//!     valid(value) { value.as_str().map_or(true, |s| !s.is_empty()) }
//!     message(subject) { format!("{subject} must not be empty.") }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! rule! {
//!     pub MinLength { min: usize };
//!     valid(self, value) { value.as_str().map_or(true, |s| s.chars().count() >= self.min) }
//!     message(self, subject) { format!("{subject} must be at least {} characters long.", self.min) }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`](crate::Rule)
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// The `valid` block receives the captured argument as a
/// [`serde_json::Value`] reference; the `message` block receives the
/// subject description (`"The count argument"`, `"The new Title value"`)
/// and produces the failure text.
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        valid($inp:ident) $valid:block
        message($subj:ident) $msg:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            valid($inp) $valid
            message($subj) $msg
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        valid($inp:ident) $valid:block
        message($subj:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn is_valid(&self, $inp: &::serde_json::Value) -> bool $valid

            #[allow(unused_variables)]
            fn format_message(&self, $subj: &str) -> ::std::string::String $msg
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        valid($self_:ident, $inp:ident) $valid:block
        message($self2:ident, $subj:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            valid($self_, $inp) $valid
            message($self2, $subj) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        valid($self_:ident, $inp:ident) $valid:block
        message($self2:ident, $subj:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn is_valid(&$self_, $inp: &::serde_json::Value) -> bool $valid

            #[allow(unused_variables)]
            fn format_message(&$self2, $subj: &str) -> ::std::string::String $msg
        }
    };
}

// ============================================================================
// ARGUMENT BINDING MACRO
// ============================================================================

/// Guards an argument by referencing the local directly.
///
/// Expands to `guard.argument("local", &local)`, so the checked name can
/// never drift from the actual local: renaming the parameter without
/// updating the guard is a compile error, the closest Rust gets to
/// expression-tree parameter binding.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil::{argument, guard};
///
/// let g = guard(ty.method("resize"))?;
/// let g = argument!(g, width)?;
/// argument!(g, height)?;
/// ```
#[macro_export]
macro_rules! argument {
    ($guard:expr, $local:ident) => {
        $guard.argument(stringify!($local), &$local)
    };
}
