// File: src/form_field.rs
// Purpose: HTML5 and client-side validation attributes derived from the field rules

use crate::config::ValidationConfig;
use crate::field::FieldName;
use crate::options::{Country, Gender, Hobby};
use crate::validation::rules::{HOBBIES_MIN_ITEMS, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use serde_json::{json, Value as JsonValue};
use std::collections::BTreeMap;

/// Attributes for a form field (HTML5 + data-validate JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// HTML5 validation attributes (required, minlength, maxlength, multiple)
    pub html5_attrs: BTreeMap<String, String>,

    /// JSON for the data-validate attribute, read by the WASM validator
    pub data_validate: String,

    /// Field label for display
    pub label: String,
}

impl FieldAttrs {
    /// Attributes mirroring the rule of `field`
    pub fn for_field(field: FieldName, config: &ValidationConfig) -> Self {
        let mut html5_attrs = BTreeMap::new();
        html5_attrs.insert("required".to_string(), String::new());

        let mut rules = serde_json::Map::new();
        rules.insert("required".to_string(), JsonValue::Bool(true));

        match field {
            FieldName::Name => {
                html5_attrs.insert("minlength".to_string(), NAME_MIN_LENGTH.to_string());
                html5_attrs.insert("maxlength".to_string(), NAME_MAX_LENGTH.to_string());
                rules.insert("minLength".to_string(), json!(NAME_MIN_LENGTH));
                rules.insert("maxLength".to_string(), json!(NAME_MAX_LENGTH));
            }
            FieldName::Address => {}
            FieldName::Country => {
                rules.insert("oneOf".to_string(), json!(Country::VALUES));
            }
            FieldName::Gender => {
                rules.insert("oneOf".to_string(), json!(Gender::VALUES));
            }
            FieldName::Hobbies => {
                html5_attrs.insert("multiple".to_string(), String::new());
                rules.insert("minItems".to_string(), json!(HOBBIES_MIN_ITEMS));
                rules.insert("oneOf".to_string(), json!(Hobby::VALUES));
                rules.insert("unique".to_string(), JsonValue::Bool(true));
            }
        }

        if config.trim_whitespace && matches!(field, FieldName::Name | FieldName::Address) {
            rules.insert("trim".to_string(), JsonValue::Bool(true));
        }

        Self {
            html5_attrs,
            data_validate: JsonValue::Object(rules).to_string(),
            label: field.label().to_string(),
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.html5_attrs.contains_key(name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.html5_attrs.get(name).map(String::as_str)
    }
}
