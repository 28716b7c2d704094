//! Constraint metadata types per VALIDATION.md
//!
//! Declared field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//!
//! Constraint kinds (closed set, one evaluation arm each):
//! - required: value present and non-empty
//! - range: integer within inclusive bounds
//! - max_length: string length in characters

use serde::{Deserialize, Serialize};

/// Declared semantic type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
        }
    }
}

/// One declared constraint attached to one field.
///
/// Immutable after registration. `{min}`, `{max}` placeholders in the
/// range/max_length message templates are filled with the configured bounds;
/// the required message is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintDef {
    /// Value must be present; an empty string or null counts as missing
    Required {
        /// Failure message, used verbatim
        message: String,
    },
    /// Integer value must satisfy min <= value <= max (inclusive both ends)
    Range {
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
        /// Failure message template, `{min}`/`{max}` substituted
        message: String,
    },
    /// String length in characters must not exceed max
    MaxLength {
        /// Maximum length in characters
        max: usize,
        /// Failure message template, `{max}` substituted
        message: String,
    },
}

impl ConstraintDef {
    /// Create a required constraint
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// Create an inclusive range constraint
    pub fn range(min: i64, max: i64, message: impl Into<String>) -> Self {
        Self::Range {
            min,
            max,
            message: message.into(),
        }
    }

    /// Create a maximum-length constraint
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConstraintDef::Required { .. } => "required",
            ConstraintDef::Range { .. } => "range",
            ConstraintDef::MaxLength { .. } => "max_length",
        }
    }

    /// Renders the failure message with the configured parameters filled in.
    pub fn render_message(&self) -> String {
        match self {
            ConstraintDef::Required { message } => message.clone(),
            ConstraintDef::Range { min, max, message } => message
                .replace("{min}", &min.to_string())
                .replace("{max}", &max.to_string()),
            ConstraintDef::MaxLength { max, message } => {
                message.replace("{max}", &max.to_string())
            }
        }
    }
}

/// Field declaration: name, declared type, and the constraints attached to
/// it in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraints {
    /// Field name
    pub name: String,
    /// Declared semantic type
    pub field_type: FieldType,
    /// Constraints in declaration order (V2)
    #[serde(default)]
    pub constraints: Vec<ConstraintDef>,
}

impl FieldConstraints {
    /// Create a field declaration with no constraints
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            constraints: Vec::new(),
        }
    }

    /// Create a string field declaration
    pub fn string_field(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Create an int field declaration
    pub fn int_field(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    /// Attach a constraint, preserving declaration order
    pub fn with(mut self, constraint: ConstraintDef) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Complete constraint declaration for one type.
///
/// Fields are kept in a Vec, not a map: declaration order drives the order
/// of reported failures (V2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConstraints {
    /// Unique type name
    pub type_name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field declarations in declaration order
    pub fields: Vec<FieldConstraints>,
}

impl TypeConstraints {
    /// Create a new type declaration
    pub fn new(type_name: impl Into<String>, fields: Vec<FieldConstraints>) -> Self {
        Self {
            type_name: type_name.into(),
            description: None,
            fields,
        }
    }

    /// Total number of declared constraints across all fields
    pub fn constraint_count(&self) -> usize {
        self.fields.iter().map(|f| f.constraints.len()).sum()
    }

    /// Validates the metadata itself (not an instance).
    ///
    /// Per V4, every structural defect is caught here, before any
    /// evaluation can observe it:
    /// - empty type name
    /// - duplicate field names
    /// - range with min > max
    /// - range attached to a non-int field
    /// - max_length attached to a non-string field
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.type_name.is_empty() {
            return Err("Type name must not be empty".into());
        }

        for (i, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(format!("Field at position {} has an empty name", i));
            }

            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("Duplicate field '{}'", field.name));
            }

            for constraint in &field.constraints {
                match constraint {
                    ConstraintDef::Required { .. } => {}
                    ConstraintDef::Range { min, max, .. } => {
                        if min > max {
                            return Err(format!(
                                "Field '{}': range bounds inverted ({} > {})",
                                field.name, min, max
                            ));
                        }
                        if field.field_type != FieldType::Int {
                            return Err(format!(
                                "Field '{}': range constraint on {} field",
                                field.name,
                                field.field_type.type_name()
                            ));
                        }
                    }
                    ConstraintDef::MaxLength { .. } => {
                        if field.field_type != FieldType::String {
                            return Err(format!(
                                "Field '{}': max_length constraint on {} field",
                                field.name,
                                field.field_type.type_name()
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
