//! # vigil
//!
//! Hierarchy-aware argument guards: a method or property setter validates
//! its own arguments against declarative rules attached anywhere in its
//! type's hierarchy — the member itself, every interface member it
//! implements (explicit implementations included), and, for setters, the
//! interface properties behind them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vigil::prelude::*;
//!
//! // Declare the type graph once, at startup.
//! let reader = TypeMetadata::interface("Reader")
//!     .method(
//!         MethodMetadata::new("read")
//!             .with_param(ParamMetadata::new("source").with_rule(required())),
//!     )
//!     .build();
//!
//! let file = TypeMetadata::class("File")
//!     .method(
//!         MethodMetadata::new("read")
//!             .with_param(ParamMetadata::new("source").with_rule(min_length(1))),
//!     )
//!     .implements(&reader)
//!     .build();
//!
//! // Inside the guarded method body:
//! fn read(file: &std::sync::Arc<TypeMetadata>, source: Option<&str>) -> GuardResult<()> {
//!     guard(file.method("read"))?.argument("source", &source)?;
//!     // ... source is validated against both declarations ...
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution model
//!
//! Rule discovery is **union, not override**: the checked parameter's own
//! rules run first (in attachment order), then the rules on the matching
//! member of each implemented interface, in the type's declared interface
//! order. Nothing is de-duplicated. Evaluation is fail-fast — the first
//! failing rule raises either
//! [`MissingRequiredArgument`](GuardError::MissingRequiredArgument) (a
//! Required rule saw an absent value) or
//! [`InvalidArgumentValue`](GuardError::InvalidArgumentValue) (any other
//! violation).
//!
//! Misusing the guard API itself — missing handle, name that is not a
//! parameter, guarding a non-value setter parameter — raises the separate
//! caller-misuse errors; see [`foundation::error`].

pub mod foundation;
pub mod guard;
mod macros;
pub mod metadata;
pub mod prelude;
pub mod rules;

pub use foundation::{GuardError, GuardResult, Rule};
pub use guard::{Guard, guard};
