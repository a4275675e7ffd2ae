// File: src/field.rs
// Purpose: Field names, field values and the value record edited by the form

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Names of the fields in the profile form.
///
/// Ordering follows the form's declaration order, which is also the order
/// of every map keyed by `FieldName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Address,
    Country,
    Gender,
    Hobbies,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Address,
        FieldName::Country,
        FieldName::Gender,
        FieldName::Hobbies,
    ];

    /// Key used in value records and HTML `name` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Address => "address",
            FieldName::Country => "country",
            FieldName::Gender => "gender",
            FieldName::Hobbies => "hobbies",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Address => "Address",
            FieldName::Country => "Country",
            FieldName::Gender => "Gender",
            FieldName::Hobbies => "Hobbies/Interests",
        }
    }

    /// Whether the field holds several selected values
    pub fn is_multi_choice(&self) -> bool {
        matches!(self, FieldName::Hobbies)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current value of one field.
///
/// Text inputs and single-choice fields hold `Text`; the empty string means
/// "nothing entered / nothing selected". Multi-choice fields hold `List`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn empty_list() -> Self {
        FieldValue::List(Vec::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// Whether `option` is the selected value, or one of them
    pub fn contains(&self, option: &str) -> bool {
        match self {
            FieldValue::Text(text) => text == option,
            FieldValue::List(items) => items.iter().any(|item| item == option),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// The value record of a form: one value per field.
///
/// Serializes as a flat JSON object such as
/// `{"name":"Al","address":"1 Rd","country":"Canada","gender":"male","hobbies":["reading"]}`.
/// Unknown keys are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<FieldName, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, name: FieldName, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<FieldValue>) {
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.0.get(&name)
    }

    /// Text of a text or single-choice field, `""` when absent
    pub fn text(&self, name: FieldName) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Items of a multi-choice field, empty when absent
    pub fn list(&self, name: FieldName) -> &[String] {
        self.get(name).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.0.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }

    /// Fills every field missing from `self` with its value in `defaults`
    pub fn fill_missing(&mut self, defaults: &FormValues) {
        for (name, value) in defaults.iter() {
            self.0.entry(name).or_insert_with(|| value.clone());
        }
    }

    /// Parses a JSON value record
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<(FieldName, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldValue)>>(iter: I) -> Self {
        FormValues(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
        assert_eq!(
            "email".parse::<FieldName>(),
            Err(FormError::UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_values_json_shape() {
        let values = FormValues::new()
            .with(FieldName::Name, "Al")
            .with(FieldName::Hobbies, vec!["reading", "music"]);

        assert_eq!(
            values.to_json().unwrap(),
            r#"{"name":"Al","hobbies":["reading","music"]}"#
        );
    }

    #[test]
    fn test_values_parse_strings_and_lists() {
        let values =
            FormValues::from_json(r#"{"country":"India","hobbies":["sports"]}"#).unwrap();

        assert_eq!(values.text(FieldName::Country), "India");
        assert_eq!(values.list(FieldName::Hobbies), &["sports".to_string()]);
        assert_eq!(values.text(FieldName::Name), "");
        assert!(values.list(FieldName::Country).is_empty());
    }

    #[test]
    fn test_values_reject_unknown_keys() {
        assert!(FormValues::from_json(r#"{"email":"a@b.c"}"#).is_err());
    }

    #[test]
    fn test_fill_missing_keeps_existing() {
        let defaults = FormValues::new()
            .with(FieldName::Name, "")
            .with(FieldName::Address, "");
        let mut values = FormValues::new().with(FieldName::Name, "Al");

        values.fill_missing(&defaults);

        assert_eq!(values.text(FieldName::Name), "Al");
        assert!(values.contains(FieldName::Address));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_field_value_contains() {
        assert!(FieldValue::from("male").contains("male"));
        assert!(!FieldValue::from("male").contains("female"));
        assert!(FieldValue::from(vec!["reading", "music"]).contains("music"));
        assert!(FieldValue::empty_list().is_empty());
    }
}
