//! Built-in type declarations
//!
//! The single registration site for the binary: each known type is declared
//! here, next to its field list, and registered once at startup. Library
//! consumers build their own registries through the same `register` surface.

use crate::validation::{
    ConstraintDef, ConstraintRegistry, FieldConstraints, TypeConstraints, ValidationResult,
};

/// Device: identifier, numeric code, free-text description.
pub fn device() -> TypeConstraints {
    TypeConstraints::new(
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
    )
}

/// Builds a registry with every catalog type registered.
///
/// Fails only if a catalog declaration is malformed, which is a programming
/// error caught the first time the binary starts.
pub fn builtin_registry() -> ValidationResult<ConstraintRegistry> {
    let mut registry = ConstraintRegistry::new();
    registry.register(device())?;
    Ok(registry)
}
