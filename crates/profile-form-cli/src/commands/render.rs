use super::read_values;
use anyhow::Result;
use profile_form::{render_form, FieldName, FormConfig, FormState, FormValidator, FormValues};
use std::path::Path;

pub fn execute(path: Option<&Path>, config: &FormConfig) -> Result<bool> {
    let values = path.map(read_values).transpose()?;
    let state = build_state(values, config);

    println!("{}", render_form(&state).into_string());
    Ok(true)
}

/// Pristine session without values; otherwise a session holding `values`
/// with every field touched so all errors are rendered
fn build_state(values: Option<FormValues>, config: &FormConfig) -> FormState {
    let validator = FormValidator::with_config(&config.validation);

    match values {
        None => FormState::new(validator),
        Some(values) => {
            let mut state = FormState::with_values(validator, values);
            for name in FieldName::ALL {
                state.set_touched(name, true);
            }
            state
        }
    }
}
