//! # profile-form
//!
//! A user profile form (name, address, country, gender, hobbies) with a
//! declarative validation schema, touched-state tracking and a submission
//! gate.
//!
//! ## Quick Start
//!
//! ```rust
//! use profile_form::{FieldName, FormState, RecordingSink};
//!
//! let mut form = FormState::profile();
//! form.set_value(FieldName::Name, "Al");
//! form.set_value(FieldName::Address, "1 Rd");
//! form.set_value(FieldName::Country, "Canada");
//! form.set_value(FieldName::Gender, "male");
//! form.set_value(FieldName::Hobbies, vec!["reading"]);
//!
//! let mut sink = RecordingSink::default();
//! form.submit(&mut sink).unwrap();
//!
//! assert_eq!(sink.len(), 1);
//! assert_eq!(form.values(), &form.validator().schema().initial_values());
//! ```
//!
//! ## Architecture
//!
//! - [`FormSchema`] maps every [`FieldName`] to a pure rule and an initial value
//! - [`FormValidator`] evaluates fields and whole forms and gates submission
//! - [`FormState`] is the explicit, owned editing session (values, touched, errors)
//! - [`SubmitSink`] receives a fully valid record
//!
//! Validation primitives live in the `profile-form-validation` crate so the
//! same checks can run inside WebAssembly.

pub mod config;
pub mod error;
pub mod field;
pub mod form_field;
pub mod options;
pub mod record;
pub mod render;
pub mod schema;
pub mod sink;
pub mod state;
pub mod validation;
pub mod validator;

pub use config::{FormConfig, SubmitConfig, ValidationConfig};
pub use error::{FormError, Result};
pub use field::{FieldName, FieldValue, FormValues};
pub use form_field::FieldAttrs;
pub use options::{Country, Gender, Hobby};
pub use record::ProfileRecord;
pub use render::render_form;
pub use schema::{FieldSpec, FormSchema};
pub use sink::{LogSink, RecordingSink, SubmitSink};
pub use state::FormState;
pub use validation::{FieldValidationError, FormValidationResult, ValidationError, ValidationResult};
pub use validator::FormValidator;
