// crates/resource-ids/src/validation.rs
// ============================================================================
// Module: Validation Adapter
// Description: Warning/error list adapter for schema-driven form validation.
// Purpose: Report resource id problems as list entries instead of failures.
// Dependencies: crate::{error, resource_id}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Schema-driven tools validate untyped field values and expect lists of
//! warnings and errors back. [`validate_resource_id`] accepts a
//! [`serde_json::Value`], reports a non-string value and an unparseable
//! string as distinct errors, and never returns more than one error.

use serde_json::Value;
use thiserror::Error;

use crate::error::ResourceIdError;
use crate::resource_id::ResourceId;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A single validation failure for a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field value was not a string.
    #[error("expected {key:?} to be a string")]
    NotAString {
        /// Field label supplied by the caller.
        key: String,
    },
    /// The field value was a string that did not parse.
    #[error(transparent)]
    Invalid(#[from] ResourceIdError),
}

/// Warnings and errors produced for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Non-fatal findings. Resource id validation currently produces none.
    pub warnings: Vec<String>,
    /// Failures; at most one entry.
    pub errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    /// Returns true when no errors were recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Builds an outcome holding a single error.
    #[must_use]
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }
}

// ============================================================================
// SECTION: Adapter
// ============================================================================

/// Validates that `value` is a string that parses strictly as `T`.
#[must_use]
pub fn validate_resource_id<T: ResourceId>(value: &Value, key: &str) -> ValidationOutcome {
    validate_with(value, key, |input| T::parse(input).map(|_| ()))
}

/// Validates `value` with an arbitrary string check.
///
/// Shared by typed identifiers and catalog grammars.
pub fn validate_with<F>(value: &Value, key: &str, check: F) -> ValidationOutcome
where
    F: FnOnce(&str) -> Result<(), ResourceIdError>,
{
    let Some(input) = value.as_str() else {
        return ValidationOutcome::from_error(ValidationError::NotAString {
            key: key.to_string(),
        });
    };
    match check(input) {
        Ok(()) => ValidationOutcome::default(),
        Err(err) => ValidationOutcome::from_error(err.into()),
    }
}
