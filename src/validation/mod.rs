//! Object validation subsystem for fieldcheck
//!
//! Per VALIDATION.md, constraints are declarative first-class metadata,
//! registered once and enforced identically on every call.
//!
//! # Design Principles
//!
//! - Complete aggregation, no short-circuit (V1)
//! - Declaration-order reporting (V2)
//! - Verdict derived from the message list (V3)
//! - Malformed metadata rejected at registration time (V4)
//! - No implicit coercion (V5)
//! - Deterministic validation

mod errors;
mod evaluator;
mod registry;
mod report;
mod types;
mod validator;

pub use errors::{
    MismatchDetails, Severity, ValidationError, ValidationErrorCode, ValidationResult,
};
pub use evaluator::{evaluate, Outcome};
pub use registry::ConstraintRegistry;
pub use report::ValidationReport;
pub use types::{ConstraintDef, FieldConstraints, FieldType, TypeConstraints};
pub use validator::ObjectValidator;
