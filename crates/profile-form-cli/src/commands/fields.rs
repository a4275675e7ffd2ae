use anyhow::Result;
use colored::Colorize;
use profile_form::{Country, FieldName, FormConfig, FormSchema, Gender, Hobby};

pub fn execute(config: &FormConfig) -> Result<bool> {
    let schema = FormSchema::profile_with(&config.validation);

    println!("{}", "Profile form fields".green().bold());
    println!();

    for spec in schema.fields() {
        let attrs = schema.field_attrs(spec.name);
        println!("  {} ({})", spec.name.as_str().cyan(), attrs.label);
        println!("    rules:   {}", attrs.data_validate);
        println!("    initial: {}", serde_json::to_string(&spec.initial_value)?);

        let options = options_for(spec.name);
        if !options.is_empty() {
            println!("    options: {}", options.join(", "));
        }
    }

    Ok(true)
}

/// "value (Label)" for each option of a choice field
fn options_for(name: FieldName) -> Vec<String> {
    fn describe(value: &str, label: &str) -> String {
        if value == label {
            value.to_string()
        } else {
            format!("{} ({})", value, label)
        }
    }

    match name {
        FieldName::Name | FieldName::Address => Vec::new(),
        FieldName::Country => Country::ALL
            .iter()
            .map(|c| describe(c.as_str(), c.label()))
            .collect(),
        FieldName::Gender => Gender::ALL
            .iter()
            .map(|g| describe(g.as_str(), g.label()))
            .collect(),
        FieldName::Hobbies => Hobby::ALL
            .iter()
            .map(|h| describe(h.as_str(), h.label()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_for_choice_fields() {
        assert!(options_for(FieldName::Name).is_empty());
        assert_eq!(
            options_for(FieldName::Country),
            vec!["India", "Canada", "Australia", "United Kingdom"]
        );
        assert_eq!(options_for(FieldName::Gender)[0], "male (Male)");
        assert_eq!(options_for(FieldName::Hobbies).len(), 4);
    }
}
