// File: src/state.rs
// Purpose: Editing session: current values, touched flags and displayed errors

use crate::config::ValidationConfig;
use crate::field::{FieldName, FieldValue, FormValues};
use crate::sink::SubmitSink;
use crate::validation::{FormValidationResult, ValidationError};
use crate::validator::FormValidator;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// State of one form session.
///
/// Created from the schema's initial values with nothing touched. Each edit
/// updates one value and marks the field touched. `errors` only ever holds
/// messages for fields that are both touched and invalid; overall validity
/// ignores the touched flags.
#[derive(Debug, Clone)]
pub struct FormState {
    validator: FormValidator,
    initial: FormValues,
    values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: BTreeMap<FieldName, String>,
    submit_count: u32,
}

impl FormState {
    pub fn new(validator: FormValidator) -> Self {
        let initial = validator.schema().initial_values();
        Self {
            validator,
            values: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            submit_count: 0,
        }
    }

    /// Fresh profile form with default settings
    pub fn profile() -> Self {
        Self::new(FormValidator::profile())
    }

    pub fn with_config(config: &ValidationConfig) -> Self {
        Self::new(FormValidator::with_config(config))
    }

    /// Session preloaded with `values`; absent fields keep their initial
    /// value. Nothing is touched yet.
    pub fn with_values(validator: FormValidator, mut values: FormValues) -> Self {
        let mut state = Self::new(validator);
        values.fill_missing(&state.initial);
        state.values = values;
        state
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: FieldName) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    /// Errors currently on display, keyed by field
    pub fn errors(&self) -> &BTreeMap<FieldName, String> {
        &self.errors
    }

    /// Error to show next to `name`: present only when touched and invalid
    pub fn visible_error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    /// Number of submit attempts since the last reset
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Whether every field is valid, touched or not
    pub fn is_valid(&self) -> bool {
        self.validator.validate_form(&self.values).valid
    }

    /// Record a user edit: update the value, mark the field touched and
    /// re-validate it
    pub fn set_value(&mut self, name: FieldName, value: impl Into<FieldValue>) {
        self.values.set(name, value);
        self.touched.insert(name);
        self.refresh_field(name);
    }

    /// Mark a field touched (blur) or untouched and re-validate it
    pub fn set_touched(&mut self, name: FieldName, touched: bool) {
        if touched {
            self.touched.insert(name);
        } else {
            self.touched.remove(&name);
        }
        self.refresh_field(name);
    }

    /// Re-validate the whole form and refresh the displayed errors.
    ///
    /// The returned result covers every field regardless of touched state.
    pub fn validate(&mut self) -> FormValidationResult {
        let result = self.validator.validate_form(&self.values);
        self.errors = result
            .errors
            .iter()
            .filter(|(name, _)| self.touched.contains(*name))
            .map(|(name, message)| (*name, message.clone()))
            .collect();
        result
    }

    /// Submit the current values.
    ///
    /// Every field is marked touched so all errors surface. When the form is
    /// valid the sink receives the values exactly once and the session resets
    /// to its initial state. Otherwise the values are left as they were and
    /// the errors are returned.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<(), ValidationError>
    where
        S: SubmitSink + ?Sized,
    {
        self.submit_count += 1;
        self.touched.extend(FieldName::ALL);

        match self.validator.submit(&self.values, sink) {
            Ok(()) => {
                self.reset();
                Ok(())
            }
            Err(err) => {
                self.errors = err.to_map();
                Err(err)
            }
        }
    }

    /// Back to the state the session was created in
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
        self.submit_count = 0;
        debug!("form reset");
    }

    fn refresh_field(&mut self, name: FieldName) {
        if !self.touched.contains(&name) {
            self.errors.remove(&name);
            return;
        }

        let value = self
            .values
            .get(name)
            .unwrap_or(&self.validator.schema().field(name).initial_value);
        match self.validator.validate_field(name, value).into_error(name) {
            Some(message) => {
                self.errors.insert(name, message);
            }
            None => {
                self.errors.remove(&name);
            }
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_pristine() {
        let state = FormState::profile();

        assert_eq!(state.values(), &state.validator().schema().initial_values());
        assert!(state.errors().is_empty());
        assert!(FieldName::ALL.iter().all(|name| !state.is_touched(*name)));
        assert!(!state.is_valid());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut state = FormState::profile();
        assert_eq!(state.visible_error(FieldName::Name), None);

        state.set_touched(FieldName::Name, true);
        assert_eq!(state.visible_error(FieldName::Name), Some("Please enter your name"));

        state.set_touched(FieldName::Name, false);
        assert_eq!(state.visible_error(FieldName::Name), None);
    }

    #[test]
    fn test_set_value_marks_touched_and_revalidates() {
        let mut state = FormState::profile();

        state.set_value(FieldName::Name, "A");
        assert!(state.is_touched(FieldName::Name));
        assert_eq!(
            state.visible_error(FieldName::Name),
            Some("name must be at least 2 characters")
        );

        state.set_value(FieldName::Name, "Al");
        assert_eq!(state.visible_error(FieldName::Name), None);

        // Untouched fields stay quiet even though they are invalid
        assert_eq!(state.visible_error(FieldName::Address), None);
        assert_eq!(state.errors().len(), 0);
    }

    #[test]
    fn test_validate_filters_by_touched() {
        let mut state = FormState::profile();
        state.set_touched(FieldName::Country, true);

        let result = state.validate();

        assert_eq!(result.errors.len(), 5);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(
            state.visible_error(FieldName::Country),
            Some("Please select your country")
        );
    }

    #[test]
    fn test_with_values_fills_missing() {
        let values = FormValues::new().with(FieldName::Name, "Al");
        let state = FormState::with_values(FormValidator::profile(), values);

        assert_eq!(state.values().text(FieldName::Name), "Al");
        assert_eq!(state.values().len(), 5);
        assert!(!state.is_touched(FieldName::Name));
    }

    #[test]
    fn test_custom_rule_validity_drives_displayed_error() {
        use crate::schema::FormSchema;
        use crate::validation::ValidationResult;

        let schema = FormSchema::profile().with_rule(FieldName::Address, |value: &FieldValue| {
            ValidationResult {
                valid: !value.contains("PO Box"),
                message: Some("looks fine".to_string()),
            }
        });
        let mut state = FormState::new(FormValidator::new(schema));

        state.set_value(FieldName::Address, "1 Rd");
        assert_eq!(state.visible_error(FieldName::Address), None);

        state.set_value(FieldName::Address, "PO Box");
        assert_eq!(state.visible_error(FieldName::Address), Some("looks fine"));
    }

    #[test]
    fn test_reset_clears_submit_count() {
        let mut state = FormState::profile();
        let mut sink = crate::sink::RecordingSink::default();

        assert!(state.submit(&mut sink).is_err());
        assert_eq!(state.submit_count(), 1);

        state.reset();
        assert_eq!(state.submit_count(), 0);
    }
}
