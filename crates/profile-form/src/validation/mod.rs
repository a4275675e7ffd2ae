// File: src/validation/mod.rs
// Purpose: Validation result types and field errors

use crate::field::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub mod rules;

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Convert from the `Result` returned by the validator primitives
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(message) => Self::failure(message),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Error to report for `field`, decided by `valid` alone.
    ///
    /// A valid result never yields a message; an invalid one without a
    /// message falls back to "`<field>` is invalid".
    pub fn into_error(self, field: FieldName) -> Option<String> {
        if self.valid {
            None
        } else {
            Some(
                self.message
                    .unwrap_or_else(|| format!("{} is invalid", field.as_str())),
            )
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        Self::from_result(result)
    }
}

/// Outcome of validating every field of a form.
///
/// `errors` holds one message per invalid field; it is empty exactly when
/// `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormValidationResult {
    pub valid: bool,
    pub errors: BTreeMap<FieldName, String>,
}

impl FormValidationResult {
    pub fn from_errors(errors: BTreeMap<FieldName, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// `Ok(())` when valid, otherwise the errors as a [`ValidationError`]
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError::from(self.errors))
        }
    }
}

/// A single invalid field and the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Submission refused because at least one field is invalid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldValidationError>,
}

impl ValidationError {
    /// Get the error message for a specific field
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Names of the invalid fields, in form order
    pub fn fields(&self) -> Vec<FieldName> {
        self.errors.iter().map(|error| error.field).collect()
    }

    pub fn to_map(&self) -> BTreeMap<FieldName, String> {
        self.errors
            .iter()
            .map(|error| (error.field, error.message.clone()))
            .collect()
    }
}

impl From<BTreeMap<FieldName, String>> for ValidationError {
    fn from(errors: BTreeMap<FieldName, String>) -> Self {
        Self {
            errors: errors
                .into_iter()
                .map(|(field, message)| FieldValidationError { field, message })
                .collect(),
        }
    }
}
