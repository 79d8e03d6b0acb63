//! Declarative type metadata — the crate's stand-in for a reflective
//! runtime.
//!
//! Rust has no runtime reflection, so the type graph the guard engine walks
//! is declared explicitly, once, at startup: each participating type is
//! described by a [`TypeMetadata`] built from its methods, parameters,
//! properties, implemented interfaces, and — for explicit interface
//! implementations — member bindings that same-name matching could never
//! discover.
//!
//! The model deliberately mirrors what an interface-dispatch map gives a
//! reflective platform:
//!
//! - interfaces are flattened transitively in declared order;
//! - every (interface, member) pair resolves to at most one concrete
//!   implementation, explicit bindings taking precedence over name matches;
//! - property setters are plain methods with a single synthetic
//!   [`SETTER_VALUE`] parameter and are resolvable back to their owning
//!   property.
//!
//! Visibility is not modelled: every declared member is discoverable, which
//! matches the engine's requirement to see non-public members too.

mod handle;
mod types;

pub use handle::MethodHandle;
pub use types::{
    MethodMetadata, ParamMetadata, PropertyMetadata, SETTER_VALUE, TypeKind, TypeMetadata,
    TypeMetadataBuilder,
};
