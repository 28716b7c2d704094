//! Per-kind constraint evaluation
//!
//! One evaluation arm per constraint kind, dispatched by a single exhaustive
//! match. Only `required` detects absence; `range` and `max_length` pass
//! vacuously when the field is missing or null. A present value of the wrong
//! shape is a FIELD_TYPE_MISMATCH error (V5), never a silent pass.

use serde_json::Value;

use super::errors::{MismatchDetails, ValidationError, ValidationResult};
use super::types::ConstraintDef;

/// Outcome of evaluating one constraint against one field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Constraint satisfied
    Pass,
    /// Constraint violated, with the rendered failure message
    Fail(String),
}

impl Outcome {
    /// Returns true when the constraint was satisfied
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// Evaluates a single constraint against the field's current value.
///
/// `value` is `None` when the instance has no entry for the field; a JSON
/// null is treated the same as absence.
pub fn evaluate(
    type_name: &str,
    field_name: &str,
    value: Option<&Value>,
    constraint: &ConstraintDef,
) -> ValidationResult<Outcome> {
    let present = value.filter(|v| !v.is_null());

    match constraint {
        ConstraintDef::Required { .. } => {
            let satisfied = match present {
                None => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            };
            Ok(verdict(satisfied, constraint))
        }
        ConstraintDef::Range { min, max, .. } => match present {
            None => Ok(Outcome::Pass),
            Some(v) => {
                let n = v.as_i64().ok_or_else(|| {
                    shape_error(type_name, field_name, "int", v)
                })?;
                Ok(verdict(n >= *min && n <= *max, constraint))
            }
        },
        ConstraintDef::MaxLength { max, .. } => match present {
            None => Ok(Outcome::Pass),
            Some(v) => {
                let s = v.as_str().ok_or_else(|| {
                    shape_error(type_name, field_name, "string", v)
                })?;
                Ok(verdict(s.chars().count() <= *max, constraint))
            }
        },
    }
}

/// Folds a predicate result into an outcome with the rendered message.
fn verdict(satisfied: bool, constraint: &ConstraintDef) -> Outcome {
    if satisfied {
        Outcome::Pass
    } else {
        Outcome::Fail(constraint.render_message())
    }
}

/// Creates a FIELD_TYPE_MISMATCH error for an incompatible value shape.
fn shape_error(type_name: &str, field_name: &str, expected: &str, actual: &Value) -> ValidationError {
    ValidationError::type_mismatch(
        type_name,
        MismatchDetails::new(field_name, expected, json_type_name(actual)),
    )
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
