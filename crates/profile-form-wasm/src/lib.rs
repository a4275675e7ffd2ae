//! Profile-Form WASM
//!
//! WebAssembly bindings for the profile form.
//! Provides real-time client-side validation using the same rules as the
//! native crate, plus a `FormSession` that owns the editing state and logs
//! valid submissions to the browser console.

use profile_form::{
    FieldName, FieldValue, FormState, FormValidator, FormValues, SubmitSink, ValidationConfig,
    ValidationError,
};
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of a submit attempt returned to JavaScript
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub submitted: bool,
    pub errors: BTreeMap<FieldName, String>,
}

impl From<Result<(), ValidationError>> for SubmitOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                submitted: true,
                errors: BTreeMap::new(),
            },
            Err(err) => Self {
                submitted: false,
                errors: err.to_map(),
            },
        }
    }
}

/// Maps are returned as plain objects rather than ES `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn parse_field(name: &str) -> Result<FieldName, String> {
    name.parse::<FieldName>().map_err(|e| e.to_string())
}

fn parse_value(value: JsValue) -> Result<FieldValue, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse value: {}", e)))
}

/// Writes valid submissions to the browser console
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SubmitSink for ConsoleSink {
    fn submit(&mut self, values: &FormValues) {
        match to_js(values) {
            Ok(js) => web_sys::console::log_2(&JsValue::from_str("Form submitted:"), &js),
            Err(_) => web_sys::console::log_1(&JsValue::from_str("Form submitted")),
        }
    }
}

/// Validate a single field value
///
/// # Returns
/// `{ valid, message? }`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateField('name', 'Al');
/// const hobbies = validateField('hobbies', ['reading']);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: JsValue) -> Result<JsValue, JsValue> {
    let field = parse_field(field_name).map_err(|e| JsValue::from_str(&e))?;
    let value = parse_value(value)?;
    to_js(&FormValidator::profile().validate_field(field, &value))
}

/// Validate a whole value record
///
/// # Returns
/// `{ valid, errors: { field: message } }`
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    to_js(&FormValidator::profile().validate_form(&values))
}

/// Editing session for one form on the page
#[wasm_bindgen]
pub struct FormSession {
    state: FormState,
    sink: ConsoleSink,
}

#[wasm_bindgen]
impl FormSession {
    #[wasm_bindgen(constructor)]
    pub fn new(trim_whitespace: Option<bool>) -> FormSession {
        let config = ValidationConfig {
            trim_whitespace: trim_whitespace.unwrap_or(false),
        };
        FormSession {
            state: FormState::with_config(&config),
            sink: ConsoleSink,
        }
    }

    /// Input/change handler
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, field: &str, value: JsValue) -> Result<(), JsValue> {
        let field = parse_field(field).map_err(|e| JsValue::from_str(&e))?;
        let value = parse_value(value)?;
        self.state.set_value(field, value);
        Ok(())
    }

    /// Blur handler
    #[wasm_bindgen(js_name = setTouched)]
    pub fn set_touched(&mut self, field: &str, touched: bool) -> Result<(), JsValue> {
        let field = parse_field(field).map_err(|e| JsValue::from_str(&e))?;
        self.state.set_touched(field, touched);
        Ok(())
    }

    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.values())
    }

    /// Errors of touched, invalid fields
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.errors())
    }

    #[wasm_bindgen(js_name = visibleError)]
    pub fn visible_error(&self, field: &str) -> Result<Option<String>, JsValue> {
        let field = parse_field(field).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.state.visible_error(field).map(str::to_string))
    }

    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn validate(&mut self) -> Result<JsValue, JsValue> {
        let result = self.state.validate();
        to_js(&result)
    }

    /// Submit handler
    ///
    /// Returns `{ submitted, errors }`. A valid form is logged to the console
    /// and reset.
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        let outcome = SubmitOutcome::from(self.state.submit(&mut self.sink));
        to_js(&outcome)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    #[wasm_bindgen(js_name = submitCount)]
    pub fn submit_count(&self) -> u32 {
        self.state.submit_count()
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("hobbies"), Ok(FieldName::Hobbies));
        assert_eq!(parse_field("email"), Err("unknown field: email".to_string()));
    }

    #[test]
    fn test_submit_outcome() {
        let accepted = SubmitOutcome::from(Ok::<(), ValidationError>(()));
        assert!(accepted.submitted);
        assert!(accepted.errors.is_empty());

        let refused = SubmitOutcome::from(
            FormValidator::profile()
                .validate_form(&FormValues::new())
                .into_result(),
        );
        assert!(!refused.submitted);
        assert_eq!(refused.errors.len(), 5);
    }

    #[test]
    fn test_outcome_serializes_as_object() {
        let outcome = SubmitOutcome::from(
            FormValidator::profile()
                .validate_form(&FormValues::new().with(FieldName::Name, "Al"))
                .into_result(),
        );
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.starts_with(r#"{"submitted":false,"errors":{"address":"#));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_validate_field_js() {
        let result = validate_field("name", JsValue::from_str("A")).unwrap();
        let result: serde_json::Value = serde_wasm_bindgen::from_value(result).unwrap();
        assert_eq!(result["valid"], false);
        assert_eq!(result["message"], "name must be at least 2 characters");
    }

    #[wasm_bindgen_test]
    fn test_unknown_field_js() {
        assert!(validate_field("email", JsValue::from_str("a@b.c")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_session_submit_resets() {
        let mut session = FormSession::default();
        session.set_value("name", JsValue::from_str("Al")).unwrap();
        session.set_value("address", JsValue::from_str("1 Rd")).unwrap();
        session.set_value("country", JsValue::from_str("Canada")).unwrap();
        session.set_value("gender", JsValue::from_str("male")).unwrap();
        session
            .set_value("hobbies", to_js(&vec!["reading"]).unwrap())
            .unwrap();

        assert!(session.is_valid());
        session.submit().unwrap();

        assert!(!session.is_valid());
        assert_eq!(session.visible_error("name").unwrap(), None);
    }
}
