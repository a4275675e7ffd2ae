// File: src/validator.rs
// Purpose: Field/form validation and the submission gate

use crate::config::ValidationConfig;
use crate::error::Result;
use crate::field::{FieldName, FieldValue, FormValues};
use crate::schema::FormSchema;
use crate::sink::SubmitSink;
use crate::validation::{FormValidationResult, ValidationError, ValidationResult};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Evaluates field rules and gates submission on overall validity.
///
/// Validation is pure: the same values always yield the same result and
/// nothing is mutated.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    schema: FormSchema,
}

impl FormValidator {
    pub fn new(schema: FormSchema) -> Self {
        Self { schema }
    }

    /// Validator for the profile form with default settings
    pub fn profile() -> Self {
        Self::new(FormSchema::profile())
    }

    pub fn with_config(config: &ValidationConfig) -> Self {
        Self::new(FormSchema::profile_with(config))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validate one candidate value against its field's rule
    pub fn validate_field(&self, name: FieldName, value: &FieldValue) -> ValidationResult {
        let result = self.schema.field(name).check(value);
        debug!(field = %name, valid = result.valid, "validated field");
        result
    }

    /// Same as [`validate_field`](Self::validate_field) with the field given by name
    pub fn validate_named(&self, name: &str, value: &FieldValue) -> Result<ValidationResult> {
        let field = name.parse::<FieldName>()?;
        Ok(self.validate_field(field, value))
    }

    /// Validate every field.
    ///
    /// All fields are evaluated so every error is available at once. A field
    /// missing from `values` is validated as its initial value.
    pub fn validate_form(&self, values: &FormValues) -> FormValidationResult {
        let mut errors = BTreeMap::new();

        for spec in self.schema.fields() {
            let value = values.get(spec.name).unwrap_or(&spec.initial_value);
            if let Some(message) = spec.check(value).into_error(spec.name) {
                errors.insert(spec.name, message);
            }
        }

        let result = FormValidationResult::from_errors(errors);
        debug!(valid = result.valid, errors = result.errors.len(), "validated form");
        result
    }

    /// Hand `values` to `sink` if, and only if, the whole form is valid.
    ///
    /// The sink is invoked exactly once on success and never on failure.
    /// Resetting the form afterwards is the caller's job; see
    /// [`FormState::submit`](crate::FormState::submit).
    pub fn submit<S>(&self, values: &FormValues, sink: &mut S) -> std::result::Result<(), ValidationError>
    where
        S: SubmitSink + ?Sized,
    {
        match self.validate_form(values).into_result() {
            Ok(()) => {
                sink.submit(values);
                info!("form submitted");
                Ok(())
            }
            Err(err) => {
                warn!(fields = ?err.fields(), "submission refused");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::sink::RecordingSink;

    fn valid_values() -> FormValues {
        FormValues::new()
            .with(FieldName::Name, "Al")
            .with(FieldName::Address, "1 Rd")
            .with(FieldName::Country, "Canada")
            .with(FieldName::Gender, "male")
            .with(FieldName::Hobbies, vec!["reading"])
    }

    #[test]
    fn test_validate_named_rejects_unknown_field() {
        let validator = FormValidator::profile();

        let result = validator.validate_named("name", &FieldValue::from("Al")).unwrap();
        assert!(result.valid);

        assert_eq!(
            validator.validate_named("email", &FieldValue::from("a@b.c")),
            Err(FormError::UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_missing_fields_use_initial_values() {
        let validator = FormValidator::profile();
        let result = validator.validate_form(&FormValues::new());

        assert!(!result.valid);
        assert_eq!(result.errors.len(), FieldName::ALL.len());
        assert_eq!(
            result.get_error(FieldName::Hobbies),
            Some("Please select at least one hobby")
        );
    }

    #[test]
    fn test_submit_invokes_sink_once() {
        let validator = FormValidator::profile();
        let mut sink = RecordingSink::default();

        validator.submit(&valid_values(), &mut sink).unwrap();

        assert_eq!(sink.submissions(), &[valid_values()]);
    }

    #[test]
    fn test_refused_submit_skips_sink() {
        let validator = FormValidator::profile();
        let mut sink = RecordingSink::default();
        let values = valid_values().with(FieldName::Gender, "");

        let err = validator.submit(&values, &mut sink).unwrap_err();

        assert!(sink.is_empty());
        assert_eq!(err.fields(), vec![FieldName::Gender]);
    }

    #[test]
    fn test_custom_rule_without_message_blocks_submit() {
        let validator = FormValidator::new(FormSchema::profile().with_rule(
            FieldName::Address,
            |_: &FieldValue| ValidationResult {
                valid: false,
                message: None,
            },
        ));
        let mut sink = RecordingSink::default();

        let field = validator.validate_field(FieldName::Address, &FieldValue::from("1 Rd"));
        assert!(!field.valid);
        assert_eq!(field.message.as_deref(), Some("address is invalid"));

        let result = validator.validate_form(&valid_values());
        assert!(!result.valid);
        assert_eq!(result.get_error(FieldName::Address), Some("address is invalid"));

        let err = validator.submit(&valid_values(), &mut sink).unwrap_err();
        assert_eq!(err.fields(), vec![FieldName::Address]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_custom_rule_message_on_success_is_ignored() {
        let validator = FormValidator::new(FormSchema::profile().with_rule(
            FieldName::Address,
            |_: &FieldValue| ValidationResult {
                valid: true,
                message: Some("looks fine".to_string()),
            },
        ));
        let mut sink = RecordingSink::default();

        let result = validator.validate_form(&valid_values());
        assert!(result.valid);
        assert!(result.errors.is_empty());

        validator.submit(&valid_values(), &mut sink).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_submit_accepts_closure_sink() {
        let validator = FormValidator::profile();
        let mut seen = Vec::new();

        validator
            .submit(&valid_values(), &mut |values: &FormValues| seen.push(values.clone()))
            .unwrap();

        assert_eq!(seen.len(), 1);
    }
}
