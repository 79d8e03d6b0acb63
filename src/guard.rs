//! The guard engine: per-call argument validation driven by hierarchy
//! resolution.
//!
//! A [`Guard`] is a short-lived value created at the top of a guarded method
//! body and discarded when the call returns. Each
//! [`argument`](Guard::argument) call resolves every rule that applies to
//! the named parameter — the parameter's own declaration plus the matching
//! declarations on every interface the declaring type implements — and
//! evaluates them fail-fast.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil::prelude::*;
//!
//! fn read(file: &Arc<TypeMetadata>, source: &str, count: u32) -> Result<(), GuardError> {
//!     guard(file.method("read"))?
//!         .argument("source", &source)?
//!         .argument("count", &count)?;
//!     // ... validated body ...
//!     Ok(())
//! }
//! ```
//!
//! # Base-class rules
//!
//! The handle passed to [`guard`] is the most-derived override, so the
//! engine never walks a base chain for parameters: the override's own rules
//! plus the interface rules are the complete set. A rule declared only on a
//! base virtual member that the override does not redeclare is **not**
//! inherited. This matches the hierarchy-resolution design this engine
//! implements and is intentional: overrides redeclare the rules they keep.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

use crate::foundation::{GuardError, GuardResult, Rule};
use crate::metadata::{MethodHandle, ParamMetadata, SETTER_VALUE};

/// The ordered union of rules resolved for one argument.
///
/// Borrowed straight out of the metadata graph; most members carry only a
/// handful of rules, so the set lives on the stack.
type ResolvedRules<'a> = SmallVec<[&'a Arc<dyn Rule>; 8]>;

/// Per-call coordinator for argument validation of one method or setter
/// invocation.
///
/// Construct with [`guard`], then chain [`argument`](Guard::argument) once
/// per checked argument. A `Guard` holds no shared state and never outlives
/// the call that created it.
#[derive(Debug, Clone)]
pub struct Guard {
    method: MethodHandle,
    /// Set iff the guarded method is a property setter.
    property: Option<String>,
}

/// Binds a guard to the currently executing method.
///
/// Accepts the `Option` returned by
/// [`TypeMetadata::method`](crate::metadata::TypeMetadata::method) directly;
/// an absent handle is caller misuse and fails with
/// [`GuardError::InvalidArgument`].
///
/// Construction also detects whether the method is a property setter by
/// searching the declaring type's properties for one backed by this method.
pub fn guard(method: Option<MethodHandle>) -> GuardResult<Guard> {
    let method = method.ok_or_else(|| {
        GuardError::InvalidArgument("a method handle is required to construct a guard".into())
    })?;
    let property = method
        .declaring_type()
        .property_of_setter(method.name())
        .map(|p| p.name().to_owned());
    Ok(Guard { method, property })
}

impl Guard {
    /// The guarded method.
    pub fn method(&self) -> &MethodHandle {
        &self.method
    }

    /// The property this guard's method sets, if it is a setter.
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// Validates one argument of the guarded method and returns the guard
    /// for chaining.
    ///
    /// `name` must be the name of one of the method's formal parameters
    /// (use the [`argument!`](crate::argument) macro to bind a real local
    /// instead of a free-floating string). The value is captured once via
    /// serde; `Option::None` captures as the absent value.
    ///
    /// Fails with:
    /// - [`GuardError::NotAReference`] if `name` is not a formal parameter;
    /// - [`GuardError::InvalidOperation`] if the method is a setter and
    ///   `name` is not the synthetic value parameter;
    /// - [`GuardError::MissingRequiredArgument`] /
    ///   [`GuardError::InvalidArgumentValue`] on the first failing rule.
    pub fn argument<V>(self, name: &str, value: &V) -> GuardResult<Self>
    where
        V: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| {
            GuardError::InvalidArgument(format!("`{name}` cannot be captured as a value: {e}"))
        })?;
        self.check(name, &value)?;
        Ok(self)
    }

    fn check(&self, name: &str, value: &Value) -> GuardResult<()> {
        let param = self
            .method
            .metadata()
            .param(name)
            .ok_or_else(|| GuardError::NotAReference {
                name: name.to_owned(),
                method: self.method.path(),
            })?;

        let (subject, rules) = if let Some(property) = &self.property {
            // A setter has exactly one guardable parameter, the value one.
            if name != SETTER_VALUE {
                return Err(GuardError::InvalidOperation(format!(
                    "`{}` is a setter of `{property}`; only its `{SETTER_VALUE}` \
                     parameter can be guarded, not `{name}`",
                    self.method.path(),
                )));
            }
            (
                format!("The new {property} value"),
                self.resolve_property_rules(property),
            )
        } else {
            (
                format!("The {name} argument"),
                self.resolve_parameter_rules(param),
            )
        };

        tracing::trace!(
            method = %self.method.path(),
            param = name,
            rules = rules.len(),
            "resolved argument rules"
        );

        for rule in rules {
            if rule.is_required() && value.is_null() {
                return Err(GuardError::MissingRequiredArgument {
                    param: name.to_owned(),
                    message: rule.format_message(&subject),
                });
            }
            if !rule.is_valid(value) {
                return Err(GuardError::InvalidArgumentValue {
                    param: name.to_owned(),
                    message: rule.format_message(&subject),
                });
            }
        }
        Ok(())
    }

    /// Ordinary-method resolution: the parameter's own rules first, then the
    /// same-named parameter on every interface member this method
    /// implements, in the type's declared interface order.
    fn resolve_parameter_rules<'a>(&'a self, param: &'a ParamMetadata) -> ResolvedRules<'a> {
        let declaring = self.method.declaring_type();
        let mut resolved: ResolvedRules<'a> = param.rules.iter().collect();
        for binding in declaring.bindings_for(self.method.name()) {
            let Some(interface) = declaring.interface_named(&binding.interface) else {
                continue;
            };
            if let Some(counterpart) = interface
                .find_method(&binding.method)
                .and_then(|m| m.param(param.name()))
            {
                resolved.extend(counterpart.rules.iter());
            }
        }
        resolved
    }

    /// Setter resolution: the property's own rules first, then the owning
    /// property of every interface setter this setter implements. Lookups
    /// go through property declarations, never the setter's formal
    /// parameter.
    fn resolve_property_rules<'a>(&'a self, property: &str) -> ResolvedRules<'a> {
        let declaring = self.method.declaring_type();
        let mut resolved: ResolvedRules<'a> = declaring
            .find_property(property)
            .map(|p| p.rules.iter().collect())
            .unwrap_or_default();
        for binding in declaring.bindings_for(self.method.name()) {
            let Some(interface) = declaring.interface_named(&binding.interface) else {
                continue;
            };
            if let Some(counterpart) = interface.property_of_setter(&binding.method) {
                resolved.extend(counterpart.rules.iter());
            }
        }
        resolved
    }
}
