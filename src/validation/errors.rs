//! Validation engine error types per ERRORS.md
//!
//! Error codes:
//! - FIELD_UNKNOWN_TYPE (REJECT)
//! - FIELD_DUPLICATE_TYPE (REJECT)
//! - FIELD_TYPE_MISMATCH (REJECT)
//! - FIELD_MALFORMED_CONSTRAINT (FATAL)
//!
//! Constraint violations are NOT errors: they aggregate into the report's
//! message list (V1). An `Err` from the engine always means the rule
//! configuration is broken, not the data.

use std::fmt;

/// Severity levels for engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The validation call is rejected
    Reject,
    /// Metadata loading must abort (startup-time configuration defect)
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Engine error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// Validation requested for a type with no registered metadata
    UnknownType,
    /// Attempt to re-register an immutable type declaration
    DuplicateType,
    /// Constraint evaluated against an incompatible value shape
    TypeMismatch,
    /// Structurally invalid constraint declaration
    MalformedConstraint,
}

impl ValidationErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::UnknownType => "FIELD_UNKNOWN_TYPE",
            ValidationErrorCode::DuplicateType => "FIELD_DUPLICATE_TYPE",
            ValidationErrorCode::TypeMismatch => "FIELD_TYPE_MISMATCH",
            ValidationErrorCode::MalformedConstraint => "FIELD_MALFORMED_CONSTRAINT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ValidationErrorCode::MalformedConstraint => Severity::Fatal,
            _ => Severity::Reject,
        }
    }

    /// Returns the invariant violated by this error
    pub fn invariant(&self) -> &'static str {
        match self {
            ValidationErrorCode::UnknownType => "V4",
            ValidationErrorCode::DuplicateType => "V4",
            ValidationErrorCode::MalformedConstraint => "V4",
            ValidationErrorCode::TypeMismatch => "V5",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Shape-mismatch details for FIELD_TYPE_MISMATCH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchDetails {
    /// Field name ("$root" for the instance itself)
    pub field: String,
    /// Expected shape
    pub expected: String,
    /// Actual shape found
    pub actual: String,
}

impl MismatchDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for MismatchDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Engine error with full context
#[derive(Debug)]
pub struct ValidationError {
    /// Error code
    code: ValidationErrorCode,
    /// Human-readable message
    message: String,
    /// Type name if applicable
    type_name: Option<String>,
    /// Mismatch details if applicable
    details: Option<MismatchDetails>,
}

impl ValidationError {
    /// Create an unknown-type error
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        let name = type_name.into();
        Self {
            code: ValidationErrorCode::UnknownType,
            message: format!("No constraints registered for type '{}'", name),
            type_name: Some(name),
            details: None,
        }
    }

    /// Create a duplicate-type error
    pub fn duplicate_type(type_name: impl Into<String>) -> Self {
        let name = type_name.into();
        Self {
            code: ValidationErrorCode::DuplicateType,
            message: format!("Type '{}' is already registered and immutable", name),
            type_name: Some(name),
            details: None,
        }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(type_name: impl Into<String>, details: MismatchDetails) -> Self {
        let name = type_name.into();
        Self {
            code: ValidationErrorCode::TypeMismatch,
            message: format!("Type mismatch in '{}': {}", name, details),
            type_name: Some(name),
            details: Some(details),
        }
    }

    /// Create a malformed-constraint error
    pub fn malformed_constraint(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::MalformedConstraint,
            message: format!(
                "Malformed constraint declaration '{}': {}",
                source.into(),
                reason.into()
            ),
            type_name: None,
            details: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the invariant violated
    pub fn invariant(&self) -> &'static str {
        self.code.invariant()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the type name if applicable
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Returns mismatch details if applicable
    pub fn details(&self) -> Option<&MismatchDetails> {
        self.details.as_ref()
    }

    /// Returns whether this error must abort metadata loading
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} [violates {}]",
            self.code.severity(),
            self.code.code(),
            self.message,
            self.code.invariant()
        )
    }
}

impl std::error::Error for ValidationError {}

/// Result type for engine operations
pub type ValidationResult<T> = Result<T, ValidationError>;
