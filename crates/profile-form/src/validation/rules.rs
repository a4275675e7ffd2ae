// File: src/validation/rules.rs
// Purpose: Validation rules for each profile field

use crate::config::ValidationConfig;
use crate::field::{FieldName, FieldValue};
use crate::options::{Country, Gender, Hobby};
use profile_form_validation as validators;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 30;
pub const HOBBIES_MIN_ITEMS: usize = 1;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const ADDRESS_REQUIRED: &str = "Please enter your address";
pub const COUNTRY_REQUIRED: &str = "Please select your country";
pub const COUNTRY_INVALID: &str = "Please select a valid country";
pub const GENDER_REQUIRED: &str = "Please select your gender";
pub const GENDER_INVALID: &str = "Please select a valid gender";
pub const HOBBIES_REQUIRED: &str = "Please select at least one hobby";
pub const HOBBIES_INVALID: &str = "Please select valid hobbies";
pub const HOBBIES_DUPLICATE: &str = "Please select each hobby only once";

fn expect_text(field: FieldName, value: &FieldValue) -> Result<&str, String> {
    value
        .as_text()
        .ok_or_else(|| format!("{} has the wrong kind of value", field))
}

fn expect_list(field: FieldName, value: &FieldValue) -> Result<&[String], String> {
    value
        .as_list()
        .ok_or_else(|| format!("{} has the wrong kind of value", field))
}

/// Required, then 2..=30 characters.
///
/// The required check runs first so an empty name reports
/// [`NAME_REQUIRED`] rather than a length error.
pub fn name(value: &FieldValue, config: &ValidationConfig) -> Result<(), String> {
    let text = expect_text(FieldName::Name, value)?;
    validators::validate_required(text, config.trim_whitespace, NAME_REQUIRED)?;

    let text = if config.trim_whitespace { text.trim() } else { text };
    validators::validate_length(
        text,
        NAME_MIN_LENGTH,
        NAME_MAX_LENGTH,
        FieldName::Name.as_str(),
    )
}

pub fn address(value: &FieldValue, config: &ValidationConfig) -> Result<(), String> {
    let text = expect_text(FieldName::Address, value)?;
    validators::validate_required(text, config.trim_whitespace, ADDRESS_REQUIRED)
}

pub fn country(value: &FieldValue, _config: &ValidationConfig) -> Result<(), String> {
    let text = expect_text(FieldName::Country, value)?;
    validators::validate_choice(text, Country::VALUES, COUNTRY_REQUIRED, COUNTRY_INVALID)
}

pub fn gender(value: &FieldValue, _config: &ValidationConfig) -> Result<(), String> {
    let text = expect_text(FieldName::Gender, value)?;
    validators::validate_choice(text, Gender::VALUES, GENDER_REQUIRED, GENDER_INVALID)
}

/// At least one hobby, each from the option set, none repeated
pub fn hobbies(value: &FieldValue, _config: &ValidationConfig) -> Result<(), String> {
    let items = expect_list(FieldName::Hobbies, value)?;
    validators::validate_min_items(items, HOBBIES_MIN_ITEMS, HOBBIES_REQUIRED)?;
    validators::validate_all_one_of(items, Hobby::VALUES, HOBBIES_INVALID)?;
    validators::validate_unique_strings(items, HOBBIES_DUPLICATE)
}

/// Rule for `field`
pub fn rule_for(field: FieldName) -> fn(&FieldValue, &ValidationConfig) -> Result<(), String> {
    match field {
        FieldName::Name => name,
        FieldName::Address => address,
        FieldName::Country => country,
        FieldName::Gender => gender,
        FieldName::Hobbies => hobbies,
    }
}
