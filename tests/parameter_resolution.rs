//! Integration tests for parameter-site rule resolution on ordinary
//! methods: own declarations, interface unions, explicit implementations,
//! and chaining.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use vigil::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

/// Interface declaring `test_method(param)` with a Required rule.
fn checkable() -> Arc<TypeMetadata> {
    TypeMetadata::interface("Checkable")
        .method(
            MethodMetadata::new("test_method")
                .with_param(ParamMetadata::new("param").with_rule(required())),
        )
        .build()
}

/// Concrete type whose `test_method` override redeclares a length rule of
/// its own on top of the interface's Required.
fn checked_class() -> Arc<TypeMetadata> {
    TypeMetadata::class("Checked")
        .method(
            MethodMetadata::new("test_method")
                .with_param(ParamMetadata::new("param").with_rule(min_length(10))),
        )
        .implements(&checkable())
        .build()
}

// ============================================================================
// END-TO-END: REQUIRED PARAMETER
// ============================================================================

#[test]
fn required_parameter_rejects_null() {
    let ty = TypeMetadata::class("Service")
        .method(
            MethodMetadata::new("handle")
                .with_param(ParamMetadata::new("request").with_rule(required())),
        )
        .build();

    let err = guard(ty.method("handle"))
        .unwrap()
        .argument("request", &None::<String>)
        .unwrap_err();

    assert!(matches!(err, GuardError::MissingRequiredArgument { .. }));
    assert_eq!(err.param(), Some("request"));
}

#[test]
fn required_parameter_accepts_present_value() {
    let ty = TypeMetadata::class("Service")
        .method(
            MethodMetadata::new("handle")
                .with_param(ParamMetadata::new("request").with_rule(required())),
        )
        .build();

    let result = guard(ty.method("handle"))
        .unwrap()
        .argument("request", &Some("payload".to_string()));
    assert!(result.is_ok());
}

// ============================================================================
// END-TO-END: OWN LENGTH RULE + INTERFACE REQUIRED
// ============================================================================

#[test]
fn short_value_fails_the_length_rule() {
    let ty = checked_class();
    let err = guard(ty.method("test_method"))
        .unwrap()
        .argument("param", &"too short")
        .unwrap_err();

    assert!(matches!(err, GuardError::InvalidArgumentValue { .. }));
    assert_eq!(
        err.to_string(),
        "The param argument must be at least 10 characters long."
    );
}

#[test]
fn null_fails_as_missing_required_not_as_length() {
    // The length rule passes absent values, so a null flows through to the
    // interface-declared Required rule and is classified as missing.
    let ty = checked_class();
    let err = guard(ty.method("test_method"))
        .unwrap()
        .argument("param", &None::<String>)
        .unwrap_err();

    assert!(matches!(err, GuardError::MissingRequiredArgument { .. }));
    assert_eq!(
        err.to_string(),
        "The param argument must not be null."
    );
}

#[test]
fn long_value_passes_both_declaration_sites() {
    let ty = checked_class();
    assert!(
        guard(ty.method("test_method"))
            .unwrap()
            .argument("param", &"long enough for ten")
            .is_ok()
    );
}

// ============================================================================
// UNION, NOT OVERRIDE
// ============================================================================

#[test]
fn interface_rule_fires_when_the_override_redeclares_nothing() {
    let iface = checkable();
    let ty = TypeMetadata::class("Bare")
        .method(MethodMetadata::new("test_method").with_param(ParamMetadata::new("param")))
        .implements(&iface)
        .build();

    let err = guard(ty.method("test_method"))
        .unwrap()
        .argument("param", &None::<String>)
        .unwrap_err();
    assert!(matches!(err, GuardError::MissingRequiredArgument { .. }));
}

#[test]
fn own_rules_are_evaluated_before_interface_rules() {
    let iface = TypeMetadata::interface("Sized")
        .method(
            MethodMetadata::new("fit")
                .with_param(ParamMetadata::new("label").with_rule(min_length(10))),
        )
        .build();
    let ty = TypeMetadata::class("Box")
        .method(
            MethodMetadata::new("fit")
                .with_param(ParamMetadata::new("label").with_rule(max_length(3))),
        )
        .implements(&iface)
        .build();

    // "hello" violates both sites; the own declaration loses first.
    let err = guard(ty.method("fit"))
        .unwrap()
        .argument("label", &"hello")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The label argument must be at most 3 characters long."
    );
}

#[test]
fn interfaces_contribute_in_declared_order() {
    let first = TypeMetadata::interface("First")
        .method(
            MethodMetadata::new("run")
                .with_param(ParamMetadata::new("input").with_rule(min_length(10))),
        )
        .build();
    let second = TypeMetadata::interface("Second")
        .method(
            MethodMetadata::new("run")
                .with_param(ParamMetadata::new("input").with_rule(max_length(2))),
        )
        .build();
    let ty = TypeMetadata::class("Runner")
        .method(MethodMetadata::new("run").with_param(ParamMetadata::new("input")))
        .implements(&first)
        .implements(&second)
        .build();

    // "abc" violates both interfaces; First was declared first.
    let err = guard(ty.method("run"))
        .unwrap()
        .argument("input", &"abc")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The input argument must be at least 10 characters long."
    );
}

#[test]
fn transitively_implemented_interfaces_contribute_rules() {
    let base = TypeMetadata::interface("Base")
        .method(
            MethodMetadata::new("emit")
                .with_param(ParamMetadata::new("tag").with_rule(not_empty())),
        )
        .build();
    let derived = TypeMetadata::interface("Derived").implements(&base).build();
    let ty = TypeMetadata::class("Emitter")
        .method(MethodMetadata::new("emit").with_param(ParamMetadata::new("tag")))
        .implements(&derived)
        .build();

    let err = guard(ty.method("emit"))
        .unwrap()
        .argument("tag", &"")
        .unwrap_err();
    assert!(matches!(err, GuardError::InvalidArgumentValue { .. }));
}

// ============================================================================
// EXPLICIT INTERFACE IMPLEMENTATIONS
// ============================================================================

#[test]
fn explicit_implementation_discovers_the_interface_rules() {
    let iface = TypeMetadata::interface("Validator")
        .method(
            MethodMetadata::new("process")
                .with_param(ParamMetadata::new("input").with_rule(not_empty())),
        )
        .build();
    let ty = TypeMetadata::class("Pipeline")
        // Unrelated public method sharing the interface method's name.
        .method(MethodMetadata::new("process").with_param(ParamMetadata::new("input")))
        // The explicit implementation, under a different name.
        .method(MethodMetadata::new("validator_process").with_param(ParamMetadata::new("input")))
        .implements(&iface)
        .binds("validator_process", &iface, "process")
        .build();

    // Guarding inside the explicit implementation finds the interface rule.
    let err = guard(ty.method("validator_process"))
        .unwrap()
        .argument("input", &"")
        .unwrap_err();
    assert!(matches!(err, GuardError::InvalidArgumentValue { .. }));

    // The unrelated public method is not bound to the interface member.
    assert!(
        guard(ty.method("process"))
            .unwrap()
            .argument("input", &"")
            .is_ok()
    );
}

// ============================================================================
// CHAINING AND BINDING
// ============================================================================

#[test]
fn chained_arguments_are_checked_in_order() {
    let ty = TypeMetadata::class("Pair")
        .method(
            MethodMetadata::new("set")
                .with_param(ParamMetadata::new("a").with_rule(not_empty()))
                .with_param(ParamMetadata::new("b").with_rule(not_empty())),
        )
        .build();

    // Both values are invalid; the first checked argument wins.
    let err = guard(ty.method("set"))
        .unwrap()
        .argument("a", &"")
        .and_then(|g| g.argument("b", &""))
        .unwrap_err();
    assert_eq!(err.param(), Some("a"));

    // With a valid first argument the chain advances to the second.
    let err = guard(ty.method("set"))
        .unwrap()
        .argument("a", &"ok")
        .and_then(|g| g.argument("b", &""))
        .unwrap_err();
    assert_eq!(err.param(), Some("b"));
}

#[test]
fn argument_macro_binds_the_local_name() {
    let ty = TypeMetadata::class("Widget")
        .method(
            MethodMetadata::new("rename")
                .with_param(ParamMetadata::new("name").with_rule(not_empty())),
        )
        .build();

    let name = "gadget";
    let g = guard(ty.method("rename")).unwrap();
    assert!(vigil::argument!(g, name).is_ok());

    let name = "";
    let g = guard(ty.method("rename")).unwrap();
    let err = vigil::argument!(g, name).unwrap_err();
    assert_eq!(err.param(), Some("name"));
}

#[test]
fn unknown_argument_name_is_not_a_reference() {
    let ty = checked_class();
    let err = guard(ty.method("test_method"))
        .unwrap()
        .argument("paran", &"irrelevant")
        .unwrap_err();

    assert!(matches!(err, GuardError::NotAReference { .. }));
    assert!(err.is_caller_misuse());
    assert_eq!(err.to_string(), "`paran` is not a parameter of `Checked::test_method`");
}
