//! Constraint registry: the per-type metadata table
//!
//! Per VALIDATION.md:
//! - Registrations are immutable; a type name is declared exactly once
//! - Structural defects are rejected at registration time (V4)
//! - No rule files and no reflection: declarations are Rust values built at
//!   type-definition time
//!
//! The registry is populated before any validation runs and then shared by
//! reference. Reads take `&self` only, so concurrent readers are safe with
//! no interior mutability and no lazily populated cache to race on.

use std::collections::HashMap;

use super::errors::{ValidationError, ValidationResult};
use super::types::{FieldConstraints, TypeConstraints};

/// Registry of declared constraints, indexed by type name.
pub struct ConstraintRegistry {
    types: HashMap<String, TypeConstraints>,
}

impl ConstraintRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registers a type declaration.
    ///
    /// # Errors
    ///
    /// - `FIELD_MALFORMED_CONSTRAINT` if the declaration fails structural
    ///   validation
    /// - `FIELD_DUPLICATE_TYPE` if the type name is already registered
    pub fn register(&mut self, declaration: TypeConstraints) -> ValidationResult<()> {
        declaration
            .validate_structure()
            .map_err(|reason| ValidationError::malformed_constraint(&declaration.type_name, reason))?;

        if self.types.contains_key(&declaration.type_name) {
            return Err(ValidationError::duplicate_type(&declaration.type_name));
        }

        self.types.insert(declaration.type_name.clone(), declaration);
        Ok(())
    }

    /// Returns the ordered descriptor list for a type.
    ///
    /// A registered type with zero constraints yields an empty slice; an
    /// unregistered type is `FIELD_UNKNOWN_TYPE`.
    pub fn describe(&self, type_name: &str) -> ValidationResult<&[FieldConstraints]> {
        self.types
            .get(type_name)
            .map(|t| t.fields.as_slice())
            .ok_or_else(|| ValidationError::unknown_type(type_name))
    }

    /// Gets a full type declaration by name.
    pub fn get(&self, type_name: &str) -> Option<&TypeConstraints> {
        self.types.get(type_name)
    }

    /// Checks whether a type is registered.
    pub fn is_registered(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Returns all registered type declarations.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeConstraints> {
        self.types.values()
    }

    /// Returns the number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

impl Default for ConstraintRegistry {
    fn default() -> Self {
        Self::new()
    }
}
