use super::read_values;
use anyhow::Result;
use colored::Colorize;
use profile_form::{FieldName, FormConfig, FormValidationResult, FormValidator, ProfileRecord};
use std::path::Path;

pub fn execute(path: &Path, config: &FormConfig, json: bool) -> Result<bool> {
    let values = read_values(path)?;
    let validator = FormValidator::with_config(&config.validation);
    let result = validator.validate_form(&values);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.valid);
    }

    println!("{}", "Validating profile...".green().bold());
    println!();

    for (name, error) in field_report(&result) {
        match error {
            None => println!("  {} {}", "✓".green(), name.label()),
            Some(message) => println!("  {} {}: {}", "✗".red(), name.label(), message.red()),
        }
    }
    println!();

    if result.valid {
        let record = ProfileRecord::parse(&validator, &values)?;
        println!("{}", record.to_string().cyan());
        println!("{}", "Form is valid".green().bold());
    } else {
        let summary = format!("{} field(s) need attention", result.errors.len());
        println!("{}", summary.yellow().bold());
    }

    Ok(result.valid)
}

/// Every field in form order with its error, if any
fn field_report(result: &FormValidationResult) -> Vec<(FieldName, Option<&str>)> {
    FieldName::ALL
        .into_iter()
        .map(|name| (name, result.get_error(name)))
        .collect()
}
