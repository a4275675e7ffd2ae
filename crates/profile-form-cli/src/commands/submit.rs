use super::read_values;
use anyhow::Result;
use colored::Colorize;
use profile_form::{FormConfig, FormState, FormValidator, FormValues, LogSink, ValidationError};
use std::path::Path;

/// What a submit attempt ended with
#[derive(Debug, PartialEq)]
enum Outcome {
    /// Delivered to the sink; holds the record the form reset to
    Submitted { reset_to: String },
    Refused(ValidationError),
}

pub fn execute(path: &Path, config: &FormConfig) -> Result<bool> {
    let values = read_values(path)?;

    match submit_values(values, config)? {
        Outcome::Submitted { reset_to } => {
            println!("{}", "Form submitted".green().bold());
            println!("Form reset to: {}", reset_to);
            Ok(true)
        }
        Outcome::Refused(err) => {
            println!("{}", "Submission refused".red().bold());
            println!();
            for error in &err.errors {
                println!("  {} {}: {}", "✗".red(), error.field.label(), error.message);
            }
            Ok(false)
        }
    }
}

fn submit_values(values: FormValues, config: &FormConfig) -> Result<Outcome> {
    let validator = FormValidator::with_config(&config.validation);
    let mut state = FormState::with_values(validator, values);
    let mut sink = LogSink::from_config(&config.submit);

    Ok(match state.submit(&mut sink) {
        Ok(()) => Outcome::Submitted {
            reset_to: state.values().to_json()?,
        },
        Err(err) => Outcome::Refused(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use profile_form::FieldName;
    use std::fs;

    fn scenario_values() -> FormValues {
        FormValues::new()
            .with(FieldName::Name, "Al")
            .with(FieldName::Address, "1 Rd")
            .with(FieldName::Country, "Canada")
            .with(FieldName::Gender, "male")
            .with(FieldName::Hobbies, vec!["reading"])
    }

    #[test]
    fn test_valid_submit_resets_record() {
        let outcome = submit_values(scenario_values(), &FormConfig::default()).unwrap();

        assert_eq!(
            outcome,
            Outcome::Submitted {
                reset_to: r#"{"name":"","address":"","country":"","gender":"","hobbies":[]}"#
                    .to_string()
            }
        );
    }

    #[test]
    fn test_invalid_submit_is_refused() {
        let values = scenario_values().with(FieldName::Name, "");

        match submit_values(values, &FormConfig::default()).unwrap() {
            Outcome::Refused(err) => {
                assert_eq!(err.fields(), vec![FieldName::Name]);
                assert_eq!(err.get(FieldName::Name), Some("Please enter your name"));
            }
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_reports_success_flag() {
        let dir = std::env::temp_dir();
        let valid = dir.join(format!("profile-submit-valid-{}.json", std::process::id()));
        let invalid = dir.join(format!("profile-submit-invalid-{}.json", std::process::id()));
        fs::write(&valid, scenario_values().to_json().unwrap()).unwrap();
        fs::write(&invalid, r#"{"name":"Al"}"#).unwrap();

        assert!(execute(&valid, &FormConfig::default()).unwrap());
        assert!(!execute(&invalid, &FormConfig::default()).unwrap());

        fs::remove_file(&valid).unwrap();
        fs::remove_file(&invalid).unwrap();
    }
}
