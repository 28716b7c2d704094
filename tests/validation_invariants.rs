//! Validation Invariant Tests
//!
//! Tests for the engine invariants:
//! - Every declared constraint is evaluated, no short-circuit (V1)
//! - Failures are reported in declaration order (V2)
//! - The verdict agrees with the error list (V3)
//! - Malformed metadata is rejected at registration time (V4)
//! - No implicit coercion (V5)

use fieldcheck::cli::builtin_registry;
use fieldcheck::validation::{
    ConstraintDef, ConstraintRegistry, FieldConstraints, ObjectValidator, TypeConstraints,
};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn device_registry() -> ConstraintRegistry {
    let mut registry = ConstraintRegistry::new();
    registry
        .register(TypeConstraints::new(
            "device",
            vec![
                FieldConstraints::string_field("id")
                    .with(ConstraintDef::required("ID Property Requires Value")),
                FieldConstraints::int_field("code").with(ConstraintDef::range(
                    10,
                    100,
                    "Code Value Must Be Within {min}-{max}",
                )),
                FieldConstraints::string_field("description").with(ConstraintDef::max_length(
                    100,
                    "Max of {max} Characters are allowed",
                )),
            ],
        ))
        .unwrap();
    registry
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same instance validates to the identical report every time.
#[test]
fn test_validation_is_deterministic() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instance = json!({
        "id": "",
        "code": 5,
        "description": ""
    });

    let first = validator.validate("device", &instance).unwrap();
    for _ in 0..100 {
        let report = validator.validate("device", &instance).unwrap();
        assert_eq!(report, first);
    }
}

/// Metadata discovery is pure: repeated describe calls yield identical lists.
#[test]
fn test_describe_is_pure() {
    let registry = device_registry();

    let first = registry.describe("device").unwrap().to_vec();
    for _ in 0..100 {
        assert_eq!(registry.describe("device").unwrap(), first.as_slice());
    }
}

// =============================================================================
// Verdict Consistency (V3)
// =============================================================================

/// is_valid agrees with the error list for every instance shape tried.
#[test]
fn test_verdict_always_agrees_with_error_list() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instances = [
        json!({}),
        json!({ "id": "X1" }),
        json!({ "id": "", "code": 5 }),
        json!({ "id": "X1", "code": 50, "description": "ok" }),
        json!({ "id": "X1", "code": 101, "description": "x".repeat(200) }),
    ];

    for instance in &instances {
        let report = validator.validate("device", instance).unwrap();
        assert_eq!(report.is_valid(), report.errors().is_empty());
    }
}

/// A type with zero declared constraints accepts everything.
#[test]
fn test_zero_constraints_always_valid() {
    let mut registry = ConstraintRegistry::new();
    registry
        .register(TypeConstraints::new(
            "anything",
            vec![FieldConstraints::string_field("note")],
        ))
        .unwrap();
    let validator = ObjectValidator::new(&registry);

    let report = validator
        .validate("anything", &json!({ "note": "", "stray": 99 }))
        .unwrap();
    assert!(report.is_valid());
    assert!(report.errors().is_empty());
}

// =============================================================================
// Order Law (V2)
// =============================================================================

/// Messages appear in field declaration order regardless of failure pattern.
#[test]
fn test_error_order_follows_declaration_order() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instance = json!({
        "id": "",
        "code": 5,
        "description": "x".repeat(101)
    });

    let report = validator.validate("device", &instance).unwrap();
    assert_eq!(
        report.errors(),
        [
            "ID Property Requires Value",
            "Code Value Must Be Within 10-100",
            "Max of 100 Characters are allowed"
        ]
    );
}

/// Per-field constraint order is preserved when one field fails repeatedly.
#[test]
fn test_constraint_order_within_field() {
    let mut registry = ConstraintRegistry::new();
    registry
        .register(TypeConstraints::new(
            "doc",
            vec![FieldConstraints::string_field("title")
                .with(ConstraintDef::max_length(2, "first declared"))
                .with(ConstraintDef::max_length(1, "second declared"))],
        ))
        .unwrap();
    let validator = ObjectValidator::new(&registry);

    let report = validator
        .validate("doc", &json!({ "title": "abc" }))
        .unwrap();
    assert_eq!(report.errors(), ["first declared", "second declared"]);
}

// =============================================================================
// Additivity (V1)
// =============================================================================

/// k failures on one field plus m on another yield exactly k+m messages.
#[test]
fn test_failures_are_additive() {
    let mut registry = ConstraintRegistry::new();
    registry
        .register(TypeConstraints::new(
            "form",
            vec![
                FieldConstraints::string_field("a")
                    .with(ConstraintDef::required("a missing"))
                    .with(ConstraintDef::max_length(1, "a long")),
                FieldConstraints::string_field("b").with(ConstraintDef::required("b missing")),
            ],
        ))
        .unwrap();
    let validator = ObjectValidator::new(&registry);

    // a fails max_length (1 failure), b fails required (1 failure)
    let report = validator
        .validate("form", &json!({ "a": "xx" }))
        .unwrap();
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.errors(), ["a long", "b missing"]);
}

/// An early failure never stops later constraints from being evaluated.
#[test]
fn test_no_short_circuit_after_failure() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instance = json!({
        "code": 5,
        "description": "x".repeat(101)
    });

    let report = validator.validate("device", &instance).unwrap();
    assert_eq!(report.error_count(), 3);
}

// =============================================================================
// Constraint Semantics
// =============================================================================

/// Required + empty string produces exactly one failure with the
/// configured message.
#[test]
fn test_required_empty_string() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let report = validator
        .validate("device", &json!({ "id": "", "code": 50 }))
        .unwrap();
    assert_eq!(report.errors(), ["ID Property Requires Value"]);
}

/// Range bounds are inclusive on both ends.
#[test]
fn test_range_boundaries() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    for (code, valid) in [(9, false), (10, true), (100, true), (101, false)] {
        let report = validator
            .validate("device", &json!({ "id": "X1", "code": code }))
            .unwrap();
        assert_eq!(report.is_valid(), valid, "code {}", code);
    }
}

/// MaxLength passes at the limit, fails one past it, and passes vacuously
/// when the field is absent.
#[test]
fn test_max_length_boundaries() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let at_limit = json!({ "id": "X1", "description": "x".repeat(100) });
    assert!(validator.validate("device", &at_limit).unwrap().is_valid());

    let over = json!({ "id": "X1", "description": "x".repeat(101) });
    let report = validator.validate("device", &over).unwrap();
    assert_eq!(report.errors(), ["Max of 100 Characters are allowed"]);

    let absent = json!({ "id": "X1" });
    assert!(validator.validate("device", &absent).unwrap().is_valid());
}

// =============================================================================
// Device Scenarios
// =============================================================================

/// {Id: "", Code: 5, Description: ""}: id and code fail, description
/// passes (empty string satisfies max_length).
#[test]
fn test_device_scenario_invalid() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instance = json!({
        "id": "",
        "code": 5,
        "description": ""
    });

    let report = validator.validate("device", &instance).unwrap();
    assert!(!report.is_valid());
    assert_eq!(
        report.errors(),
        [
            "ID Property Requires Value",
            "Code Value Must Be Within 10-100"
        ]
    );
}

/// {Id: "X1", Code: 50, Description: "ok"} is fully valid.
#[test]
fn test_device_scenario_valid() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instance = json!({
        "id": "X1",
        "code": 50,
        "description": "ok"
    });

    let report = validator.validate("device", &instance).unwrap();
    assert!(report.is_valid());
    assert!(report.errors().is_empty());
}

// =============================================================================
// Configuration Errors Abort (V4, V5)
// =============================================================================

/// An unregistered type is a configuration error, not an invalid report.
#[test]
fn test_unknown_type_is_an_error_not_a_report() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let err = validator.validate("widget", &json!({})).unwrap_err();
    assert_eq!(err.code().code(), "FIELD_UNKNOWN_TYPE");
}

/// Inverted range bounds are rejected when the declaration is registered,
/// before any instance exists.
#[test]
fn test_inverted_bounds_rejected_at_registration() {
    let mut registry = ConstraintRegistry::new();
    let err = registry
        .register(TypeConstraints::new(
            "broken",
            vec![FieldConstraints::int_field("n")
                .with(ConstraintDef::range(100, 10, "never evaluated"))],
        ))
        .unwrap_err();

    assert_eq!(err.code().code(), "FIELD_MALFORMED_CONSTRAINT");
    assert!(err.is_fatal());
}

/// A shape mismatch aborts the whole call; no partial report escapes.
#[test]
fn test_type_mismatch_aborts_call() {
    let registry = device_registry();
    let validator = ObjectValidator::new(&registry);

    let instance = json!({
        "id": "",
        "code": "five"
    });

    let err = validator.validate("device", &instance).unwrap_err();
    assert_eq!(err.code().code(), "FIELD_TYPE_MISMATCH");
    assert_eq!(err.details().unwrap().field, "code");
}

// =============================================================================
// Catalog
// =============================================================================

/// The built-in catalog declares the device type identically to the
/// programmatic registration used above.
#[test]
fn test_catalog_matches_programmatic_registration() {
    let catalog = builtin_registry().unwrap();
    let programmatic = device_registry();

    assert_eq!(
        catalog.describe("device").unwrap(),
        programmatic.describe("device").unwrap()
    );

    let validator = ObjectValidator::new(&catalog);
    let report = validator
        .validate("device", &json!({ "id": "", "code": 5, "description": "" }))
        .unwrap();
    assert_eq!(
        report.errors(),
        [
            "ID Property Requires Value",
            "Code Value Must Be Within 10-100"
        ]
    );
}
