//! Opaque handle to a method or property setter.

use std::sync::Arc;

use crate::metadata::{MethodMetadata, TypeMetadata};

/// A reference to one method on one type — the "currently executing method"
/// a guarded body hands to [`guard`](crate::guard).
///
/// Handles are cheap to clone (an `Arc` plus an index) and expose the
/// declaring type and the method's parameter list.
#[derive(Debug, Clone)]
pub struct MethodHandle {
    declaring: Arc<TypeMetadata>,
    index: usize,
}

impl MethodHandle {
    pub(crate) fn new(declaring: Arc<TypeMetadata>, index: usize) -> Self {
        Self { declaring, index }
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    /// The type that declares this method.
    pub fn declaring_type(&self) -> &Arc<TypeMetadata> {
        &self.declaring
    }

    /// The method's formal parameters, in declaration order.
    pub fn params(&self) -> &[crate::metadata::ParamMetadata] {
        self.metadata().params()
    }

    /// Full `Type::method` path, used in error messages.
    pub fn path(&self) -> String {
        format!("{}::{}", self.declaring.name(), self.name())
    }

    pub(crate) fn metadata(&self) -> &MethodMetadata {
        &self.declaring.methods[self.index]
    }
}
