//! Object validator
//!
//! Validation semantics per VALIDATION.md:
//! - Every declared constraint on every field is evaluated; failures
//!   aggregate and never short-circuit (V1)
//! - Failure messages appear in declaration order: fields in declaration
//!   order, then per-field constraints in declaration order (V2)
//! - The verdict is true iff the message list is empty (V3)
//!
//! The validator does not mutate the instance and holds no reference to it
//! beyond the call. Configuration defects (unknown type, shape mismatch)
//! abort the call as errors; they are never folded into the report.

use serde_json::Value;

use super::errors::{MismatchDetails, ValidationError, ValidationResult};
use super::evaluator::{evaluate, json_type_name, Outcome};
use super::registry::ConstraintRegistry;
use super::report::ValidationReport;

/// Validator that checks instances against their type's declared constraints.
///
/// Borrows the registry; validation is deterministic and read-only.
pub struct ObjectValidator<'a> {
    registry: &'a ConstraintRegistry,
}

impl<'a> ObjectValidator<'a> {
    /// Creates a new validator backed by the given registry.
    pub fn new(registry: &'a ConstraintRegistry) -> Self {
        Self { registry }
    }

    /// Validates an instance against its type's declared constraints.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - The type is not registered (FIELD_UNKNOWN_TYPE)
    /// - The instance is not a JSON object (FIELD_TYPE_MISMATCH)
    /// - A field value's shape is incompatible with a constraint
    ///   (FIELD_TYPE_MISMATCH)
    ///
    /// Ordinary constraint violations are data, not errors: they are
    /// returned inside the report.
    pub fn validate(&self, type_name: &str, instance: &Value) -> ValidationResult<ValidationReport> {
        let fields = self.registry.describe(type_name)?;

        let obj = instance.as_object().ok_or_else(|| {
            ValidationError::type_mismatch(
                type_name,
                MismatchDetails::new("$root", "object", json_type_name(instance)),
            )
        })?;

        let mut errors = Vec::new();
        for field in fields {
            let value = obj.get(&field.name);
            for constraint in &field.constraints {
                match evaluate(type_name, &field.name, value, constraint)? {
                    Outcome::Pass => {}
                    Outcome::Fail(message) => errors.push(message),
                }
            }
        }

        Ok(ValidationReport::new(errors))
    }
}
