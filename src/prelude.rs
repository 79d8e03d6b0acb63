//! Prelude module for convenient imports.
//!
//! Provides a single `use vigil::prelude::*;` import that brings in the
//! guard entry points, the metadata builders, the error taxonomy, and all
//! built-in rule factories.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil::prelude::*;
//!
//! let reader = TypeMetadata::interface("Reader")
//!     .method(
//!         MethodMetadata::new("read")
//!             .with_param(ParamMetadata::new("source").with_rule(required())),
//!     )
//!     .build();
//! ```

// ============================================================================
// FOUNDATION: rule capability, errors
// ============================================================================

pub use crate::foundation::{GuardError, GuardResult, Rule, RuleList};

// ============================================================================
// METADATA: type graph builders and handles
// ============================================================================

pub use crate::metadata::{
    MethodHandle, MethodMetadata, ParamMetadata, PropertyMetadata, SETTER_VALUE, TypeKind,
    TypeMetadata, TypeMetadataBuilder,
};

// ============================================================================
// GUARD: the engine
// ============================================================================

pub use crate::guard::{Guard, guard};

// ============================================================================
// RULES: built-in rule factories
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::rules::*;
