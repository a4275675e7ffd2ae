// File: src/render.rs
// Purpose: Server-rendered HTML for a form session (Maud)

use crate::field::FieldName;
use crate::options::{Country, Gender, Hobby};
use crate::state::FormState;
use maud::{html, Markup};

/// Render the whole profile form.
///
/// Helper text is shown only for fields that are touched and invalid,
/// matching [`FormState::visible_error`].
pub fn render_form(state: &FormState) -> Markup {
    html! {
        form method="post" novalidate {
            h3.form-title { "User Information" }
            (text_input(state, FieldName::Name))
            (country_select(state))
            (address_textarea(state))
            (gender_radios(state))
            (hobbies_select(state))
            button type="submit" { "Submit" }
        }
    }
}

fn helper_text(state: &FormState, name: FieldName) -> Markup {
    html! {
        @if let Some(message) = state.visible_error(name) {
            p.helper-text.error id={ (name.as_str()) "-helper" } { (message) }
        }
    }
}

fn text_input(state: &FormState, name: FieldName) -> Markup {
    let attrs = state.validator().schema().field_attrs(name);
    let has_error = state.visible_error(name).is_some();

    html! {
        div.field.error[has_error] {
            label for=(name.as_str()) { (attrs.label) }
            input type="text" id=(name.as_str()) name=(name.as_str())
                value=(state.values().text(name))
                required[attrs.has_attr("required")]
                minlength=[attrs.attr("minlength")]
                maxlength=[attrs.attr("maxlength")]
                data-validate=(attrs.data_validate);
            (helper_text(state, name))
        }
    }
}

fn address_textarea(state: &FormState) -> Markup {
    let name = FieldName::Address;
    let attrs = state.validator().schema().field_attrs(name);
    let has_error = state.visible_error(name).is_some();

    html! {
        div.field.error[has_error] {
            label for=(name.as_str()) { (attrs.label) }
            textarea id=(name.as_str()) name=(name.as_str()) rows="4"
                required[attrs.has_attr("required")]
                data-validate=(attrs.data_validate) {
                (state.values().text(name))
            }
            (helper_text(state, name))
        }
    }
}

fn country_select(state: &FormState) -> Markup {
    let name = FieldName::Country;
    let attrs = state.validator().schema().field_attrs(name);
    let selected = state.values().text(name);
    let has_error = state.visible_error(name).is_some();

    html! {
        div.field.error[has_error] {
            label for=(name.as_str()) { (attrs.label) }
            select id=(name.as_str()) name=(name.as_str()) data-validate=(attrs.data_validate) {
                option value="" selected[selected.is_empty()] { "Select" }
                @for country in Country::ALL {
                    option value=(country.as_str()) selected[selected == country.as_str()] {
                        (country.label())
                    }
                }
            }
            (helper_text(state, name))
        }
    }
}

fn gender_radios(state: &FormState) -> Markup {
    let name = FieldName::Gender;
    let attrs = state.validator().schema().field_attrs(name);
    let selected = state.values().text(name);
    let has_error = state.visible_error(name).is_some();

    html! {
        fieldset.field.error[has_error] data-validate=(attrs.data_validate) {
            legend { (attrs.label) }
            @for gender in Gender::ALL {
                label {
                    input type="radio" name=(name.as_str()) value=(gender.as_str())
                        checked[selected == gender.as_str()];
                    " " (gender.label())
                }
            }
            (helper_text(state, name))
        }
    }
}

fn hobbies_select(state: &FormState) -> Markup {
    let name = FieldName::Hobbies;
    let attrs = state.validator().schema().field_attrs(name);
    let selected = state.values().list(name);
    let has_error = state.visible_error(name).is_some();

    html! {
        div.field.error[has_error] {
            label for=(name.as_str()) { (attrs.label) }
            select id=(name.as_str()) name=(name.as_str()) multiple data-validate=(attrs.data_validate) {
                @for hobby in Hobby::ALL {
                    option value=(hobby.as_str())
                        selected[selected.iter().any(|item| item == hobby.as_str())] {
                        (hobby.label())
                    }
                }
            }
            (helper_text(state, name))
        }
    }
}
