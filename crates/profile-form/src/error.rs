// File: src/error.rs
// Purpose: Library error type

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors raised by the profile form API.
///
/// Invalid field values are not errors on their own; they are reported as
/// data through [`crate::ValidationResult`]. A [`ValidationError`] only shows
/// up here when a caller asks for a fully valid record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("'{value}' is not a valid {set}")]
    UnknownOption { set: &'static str, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, FormError>;
