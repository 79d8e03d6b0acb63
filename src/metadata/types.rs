//! Declarative type metadata: classes, interfaces, members, and the
//! interface-implementation map.
//!
//! The metadata graph is built once, up front, through [`TypeMetadataBuilder`]
//! and then shared immutably behind `Arc`. The guard engine treats it as the
//! fixed, already-loaded type graph a reflective runtime would provide.

use std::sync::Arc;

use crate::foundation::{Rule, RuleList};
use crate::metadata::MethodHandle;

/// The name of the synthetic value parameter every property setter takes.
pub const SETTER_VALUE: &str = "value";

/// Whether a [`TypeMetadata`] describes a concrete class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A concrete type whose methods can be guarded.
    Class,
    /// An abstract contract whose members contribute rules to implementors.
    Interface,
}

// ============================================================================
// PARAMETERS
// ============================================================================

/// A formal parameter declaration with its attached rules.
#[derive(Debug)]
pub struct ParamMetadata {
    pub(crate) name: String,
    pub(crate) rules: RuleList,
}

impl ParamMetadata {
    /// Declares a parameter with the given name and no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: RuleList::new(),
        }
    }

    /// Attaches a rule to this parameter. Attachment order is evaluation
    /// order within this declaration site.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// METHODS
// ============================================================================

/// A method declaration: a name and its ordered formal parameters.
#[derive(Debug)]
pub struct MethodMetadata {
    pub(crate) name: String,
    pub(crate) params: Vec<ParamMetadata>,
}

impl MethodMetadata {
    /// Declares a method with the given name and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Appends a formal parameter.
    #[must_use]
    pub fn with_param(mut self, param: ParamMetadata) -> Self {
        self.params.push(param);
        self
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a formal parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParamMetadata> {
        self.params.iter().find(|p| p.name == name)
    }

    /// The formal parameters, in declaration order.
    pub fn params(&self) -> &[ParamMetadata] {
        &self.params
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// A property declaration: rules attach here, not to the setter's
/// formal parameter.
#[derive(Debug)]
pub struct PropertyMetadata {
    pub(crate) name: String,
    pub(crate) rules: RuleList,
    pub(crate) setter: Option<String>,
}

impl PropertyMetadata {
    /// Declares a property with the given name, no rules, and no setter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: RuleList::new(),
            setter: None,
        }
    }

    /// Attaches a rule to this property.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names the setter method backing this property.
    ///
    /// If no method with this name is declared on the owning type,
    /// [`TypeMetadataBuilder::build`] synthesizes one with the single
    /// [`SETTER_VALUE`] parameter, mirroring a compiler-generated accessor.
    #[must_use]
    pub fn with_setter(mut self, method: impl Into<String>) -> Self {
        self.setter = Some(method.into());
        self
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The setter method name, if the property is settable.
    pub fn setter(&self) -> Option<&str> {
        self.setter.as_deref()
    }
}

// ============================================================================
// INTERFACE MAP
// ============================================================================

/// One entry of the interface-implementation map: `implemented_by` on the
/// concrete type is the implementation of `method` on `interface`.
#[derive(Debug, Clone)]
pub(crate) struct InterfaceBinding {
    pub(crate) interface: String,
    pub(crate) method: String,
    pub(crate) implemented_by: String,
}

// ============================================================================
// TYPE METADATA
// ============================================================================

/// An immutable type description shared behind `Arc`.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil::metadata::{MethodMetadata, ParamMetadata, TypeMetadata};
/// use vigil::rules::{min_length, required};
///
/// let reader = TypeMetadata::interface("Reader")
///     .method(
///         MethodMetadata::new("read")
///             .with_param(ParamMetadata::new("source").with_rule(required())),
///     )
///     .build();
///
/// let file = TypeMetadata::class("File")
///     .method(
///         MethodMetadata::new("read")
///             .with_param(ParamMetadata::new("source").with_rule(min_length(1))),
///     )
///     .implements(&reader)
///     .build();
/// ```
#[derive(Debug)]
pub struct TypeMetadata {
    pub(crate) name: String,
    pub(crate) kind: TypeKind,
    pub(crate) methods: Vec<MethodMetadata>,
    pub(crate) properties: Vec<PropertyMetadata>,
    /// Transitive closure of implemented interfaces, in declared order.
    pub(crate) interfaces: Vec<Arc<TypeMetadata>>,
    /// Interface-implementation map, ordered by `interfaces` then by the
    /// interface's member order.
    pub(crate) interface_map: Vec<InterfaceBinding>,
}

impl TypeMetadata {
    /// Starts building a concrete class.
    pub fn class(name: impl Into<String>) -> TypeMetadataBuilder {
        TypeMetadataBuilder::new(name, TypeKind::Class)
    }

    /// Starts building an interface.
    pub fn interface(name: impl Into<String>) -> TypeMetadataBuilder {
        TypeMetadataBuilder::new(name, TypeKind::Interface)
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a class or an interface.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Every interface this type implements, directly or transitively,
    /// in declared order.
    pub fn interfaces(&self) -> &[Arc<TypeMetadata>] {
        &self.interfaces
    }

    /// Obtains a handle to the named method, suitable for
    /// [`guard`](crate::guard).
    pub fn method(self: &Arc<Self>, name: &str) -> Option<MethodHandle> {
        let index = self.methods.iter().position(|m| m.name == name)?;
        Some(MethodHandle::new(Arc::clone(self), index))
    }

    pub(crate) fn find_method(&self, name: &str) -> Option<&MethodMetadata> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub(crate) fn find_property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The property whose setter is the named method, if any.
    pub(crate) fn property_of_setter(&self, method: &str) -> Option<&PropertyMetadata> {
        self.properties
            .iter()
            .find(|p| p.setter.as_deref() == Some(method))
    }

    /// Interface-map entries naming `concrete` as the implementation,
    /// in map order.
    pub(crate) fn bindings_for<'a>(
        &'a self,
        concrete: &'a str,
    ) -> impl Iterator<Item = &'a InterfaceBinding> {
        self.interface_map
            .iter()
            .filter(move |b| b.implemented_by == concrete)
    }

    pub(crate) fn interface_named(&self, name: &str) -> Option<&Arc<TypeMetadata>> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`TypeMetadata`].
///
/// `build()` performs three fixups that mirror what a reflective runtime
/// would hand us for free:
///
/// 1. synthesizes a setter method (single [`SETTER_VALUE`] parameter) for
///    every settable property whose setter is not explicitly declared;
/// 2. flattens the implemented interfaces into their transitive closure,
///    preserving declared order and deduplicating by name;
/// 3. computes the interface-implementation map — explicit bindings
///    registered via [`binds`](Self::binds) win, same-name matching fills
///    the rest.
#[derive(Debug)]
pub struct TypeMetadataBuilder {
    name: String,
    kind: TypeKind,
    methods: Vec<MethodMetadata>,
    properties: Vec<PropertyMetadata>,
    direct_interfaces: Vec<Arc<TypeMetadata>>,
    explicit_bindings: Vec<InterfaceBinding>,
}

impl TypeMetadataBuilder {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
            properties: Vec::new(),
            direct_interfaces: Vec::new(),
            explicit_bindings: Vec::new(),
        }
    }

    /// Declares a method on this type.
    #[must_use]
    pub fn method(mut self, method: MethodMetadata) -> Self {
        self.methods.push(method);
        self
    }

    /// Declares a property on this type.
    #[must_use]
    pub fn property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    /// Declares that this type implements `interface`.
    ///
    /// The interface's own interfaces are picked up transitively at
    /// `build()`.
    #[must_use]
    pub fn implements(mut self, interface: &Arc<TypeMetadata>) -> Self {
        self.direct_interfaces.push(Arc::clone(interface));
        self
    }

    /// Registers an explicit interface implementation: the method named
    /// `concrete` on this type implements `method` on `interface`, even
    /// though the names differ.
    ///
    /// An explicit binding suppresses same-name matching for that
    /// interface member, so a public method that happens to share the
    /// interface method's name stays unrelated to it.
    #[must_use]
    pub fn binds(
        mut self,
        concrete: impl Into<String>,
        interface: &Arc<TypeMetadata>,
        method: impl Into<String>,
    ) -> Self {
        self.explicit_bindings.push(InterfaceBinding {
            interface: interface.name.clone(),
            method: method.into(),
            implemented_by: concrete.into(),
        });
        self
    }

    /// Finalizes the type and shares it behind `Arc`.
    pub fn build(mut self) -> Arc<TypeMetadata> {
        self.synthesize_setters();
        let interfaces = self.flatten_interfaces();
        let interface_map = self.map_interfaces(&interfaces);

        tracing::debug!(
            name = %self.name,
            kind = ?self.kind,
            methods = self.methods.len(),
            properties = self.properties.len(),
            interfaces = interfaces.len(),
            bindings = interface_map.len(),
            "type metadata built"
        );

        Arc::new(TypeMetadata {
            name: self.name,
            kind: self.kind,
            methods: self.methods,
            properties: self.properties,
            interfaces,
            interface_map,
        })
    }

    fn synthesize_setters(&mut self) {
        let missing: Vec<String> = self
            .properties
            .iter()
            .filter_map(|p| p.setter.clone())
            .filter(|s| !self.methods.iter().any(|m| &m.name == s))
            .collect();
        for setter in missing {
            self.methods
                .push(MethodMetadata::new(setter).with_param(ParamMetadata::new(SETTER_VALUE)));
        }
    }

    fn flatten_interfaces(&self) -> Vec<Arc<TypeMetadata>> {
        let mut closure: Vec<Arc<TypeMetadata>> = Vec::new();
        for direct in &self.direct_interfaces {
            if !closure.iter().any(|i| i.name == direct.name) {
                closure.push(Arc::clone(direct));
            }
            for inherited in &direct.interfaces {
                if !closure.iter().any(|i| i.name == inherited.name) {
                    closure.push(Arc::clone(inherited));
                }
            }
        }
        closure
    }

    fn map_interfaces(&self, interfaces: &[Arc<TypeMetadata>]) -> Vec<InterfaceBinding> {
        let mut map = Vec::new();
        for interface in interfaces {
            for member in &interface.methods {
                let explicit = self
                    .explicit_bindings
                    .iter()
                    .find(|b| b.interface == interface.name && b.method == member.name);
                if let Some(binding) = explicit {
                    map.push(binding.clone());
                } else if self.methods.iter().any(|m| m.name == member.name) {
                    map.push(InterfaceBinding {
                        interface: interface.name.clone(),
                        method: member.name.clone(),
                        implemented_by: member.name.clone(),
                    });
                }
            }
        }
        map
    }
}
