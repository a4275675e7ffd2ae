// File: src/record.rs
// Purpose: Typed view of a fully valid profile record

use crate::error::{FormError, Result};
use crate::field::{FieldName, FormValues};
use crate::options::{Country, Gender, Hobby};
use crate::validator::FormValidator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A profile whose values passed validation.
///
/// Only obtainable through [`ProfileRecord::parse`] (or `TryFrom`), so
/// holding one proves the record was valid. Deserializing goes through the
/// same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormValues")]
pub struct ProfileRecord {
    name: String,
    address: String,
    country: Country,
    gender: Gender,
    hobbies: Vec<Hobby>,
}

impl ProfileRecord {
    /// Validate `values` with `validator` and convert them
    pub fn parse(validator: &FormValidator, values: &FormValues) -> Result<Self> {
        validator.validate_form(values).into_result()?;

        Ok(Self {
            name: values.text(FieldName::Name).to_string(),
            address: values.text(FieldName::Address).to_string(),
            country: values.text(FieldName::Country).parse()?,
            gender: values.text(FieldName::Gender).parse()?,
            hobbies: values
                .list(FieldName::Hobbies)
                .iter()
                .map(|hobby| hobby.parse::<Hobby>())
                .collect::<std::result::Result<_, FormError>>()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn hobbies(&self) -> &[Hobby] {
        &self.hobbies
    }

    /// Back to the raw value record
    pub fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(FieldName::Name, self.name.as_str())
            .with(FieldName::Address, self.address.as_str())
            .with(FieldName::Country, self.country.as_str())
            .with(FieldName::Gender, self.gender.as_str())
            .with(
                FieldName::Hobbies,
                self.hobbies.iter().map(Hobby::as_str).collect::<Vec<_>>(),
            )
    }
}

impl TryFrom<&FormValues> for ProfileRecord {
    type Error = FormError;

    fn try_from(values: &FormValues) -> Result<Self> {
        Self::parse(&FormValidator::profile(), values)
    }
}

impl TryFrom<FormValues> for ProfileRecord {
    type Error = FormError;

    fn try_from(values: FormValues) -> Result<Self> {
        Self::parse(&FormValidator::profile(), &values)
    }
}

impl fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hobbies: Vec<&str> = self.hobbies.iter().map(Hobby::label).collect();
        write!(
            f,
            "{} ({}, {}) from {}: {}",
            self.name,
            self.gender.label(),
            self.address,
            self.country.label(),
            hobbies.join(", ")
        )
    }
}
