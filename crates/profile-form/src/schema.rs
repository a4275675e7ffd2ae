// File: src/schema.rs
// Purpose: Declarative form schema: one rule and initial value per field

use crate::config::ValidationConfig;
use crate::field::{FieldName, FieldValue, FormValues};
use crate::form_field::FieldAttrs;
use crate::validation::{rules, ValidationResult};
use std::fmt;
use std::sync::Arc;

/// Pure rule evaluated against a candidate field value
pub type Rule = Arc<dyn Fn(&FieldValue) -> ValidationResult + Send + Sync>;

/// Rule and initial value for one field
#[derive(Clone)]
pub struct FieldSpec {
    pub name: FieldName,
    pub initial_value: FieldValue,
    rule: Rule,
}

impl FieldSpec {
    pub fn new<F>(name: FieldName, initial_value: FieldValue, rule: F) -> Self
    where
        F: Fn(&FieldValue) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            name,
            initial_value,
            rule: Arc::new(rule),
        }
    }

    /// Evaluate the rule against `value`.
    ///
    /// The result carries a message exactly when it is invalid.
    pub fn check(&self, value: &FieldValue) -> ValidationResult {
        match (self.rule)(value).into_error(self.name) {
            None => ValidationResult::success(),
            Some(message) => ValidationResult::failure(message),
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("initial_value", &self.initial_value)
            .finish_non_exhaustive()
    }
}

/// The full set of field specs.
///
/// Holds exactly one [`FieldSpec`] per [`FieldName`], so every key of a
/// value record always has a rule.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
    config: ValidationConfig,
}

impl FormSchema {
    /// Profile schema with default validation settings
    pub fn profile() -> Self {
        Self::profile_with(&ValidationConfig::default())
    }

    /// Profile schema: text fields start as `""`, hobbies as `[]`
    pub fn profile_with(config: &ValidationConfig) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| {
                let initial_value = if name.is_multi_choice() {
                    FieldValue::empty_list()
                } else {
                    FieldValue::empty_text()
                };
                let rule = rules::rule_for(name);
                let rule_config = config.clone();
                FieldSpec::new(name, initial_value, move |value| {
                    ValidationResult::from_result(rule(value, &rule_config))
                })
            })
            .collect();

        Self {
            fields,
            config: config.clone(),
        }
    }

    /// Replace the rule for one field, keeping its initial value
    pub fn with_rule<F>(mut self, name: FieldName, rule: F) -> Self
    where
        F: Fn(&FieldValue) -> ValidationResult + Send + Sync + 'static,
    {
        let spec = &mut self.fields[name.index()];
        spec.rule = Arc::new(rule);
        self
    }

    pub fn field(&self, name: FieldName) -> &FieldSpec {
        &self.fields[name.index()]
    }

    /// Field specs in form order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// The value record a fresh form starts with
    pub fn initial_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|spec| (spec.name, spec.initial_value.clone()))
            .collect()
    }

    /// HTML5 and client-side validation attributes for a field
    pub fn field_attrs(&self, name: FieldName) -> FieldAttrs {
        FieldAttrs::for_field(name, &self.config)
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_initial_values() {
        let schema = FormSchema::profile();
        assert_eq!(
            schema.initial_values().to_json().unwrap(),
            r#"{"name":"","address":"","country":"","gender":"","hobbies":[]}"#
        );
    }

    #[test]
    fn test_one_spec_per_field_in_order() {
        let schema = FormSchema::profile();
        let names: Vec<FieldName> = schema.fields().map(|spec| spec.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());

        for name in FieldName::ALL {
            assert_eq!(schema.field(name).name, name);
        }
    }

    #[test]
    fn test_with_rule_overrides_single_field() {
        let schema = FormSchema::profile().with_rule(FieldName::Address, |value| {
            if value.contains("PO Box 1") {
                ValidationResult::failure("PO boxes are not accepted")
            } else {
                ValidationResult::success()
            }
        });

        let address = schema.field(FieldName::Address);
        assert!(address.check(&FieldValue::from("")).valid);
        assert!(!address.check(&FieldValue::from("PO Box 1")).valid);

        // Other fields keep the profile rules
        assert!(!schema.field(FieldName::Name).check(&FieldValue::from("")).valid);
    }

    #[test]
    fn test_config_is_captured_by_rules() {
        let schema = FormSchema::profile_with(&ValidationConfig {
            trim_whitespace: true,
        });
        let result = schema.field(FieldName::Address).check(&FieldValue::from("  "));
        assert_eq!(result.message.as_deref(), Some("Please enter your address"));
    }
}
