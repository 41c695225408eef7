//! Caller-facing input shapes.
//!
//! Forms deserialize raw request payloads and convert into validated domain
//! payloads. Conversions collect every offending field into one
//! [`validator::ValidationErrors`] value instead of failing on the first.

use validator::{ValidationError, ValidationErrors};

pub mod parts;
pub mod templates;
pub mod users;
pub mod wheels;

/// Attach a custom validation failure to a field.
pub(crate) fn add_error(
    errors: &mut ValidationErrors,
    field: &'static str,
    code: &'static str,
    message: impl Into<String>,
) {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into().into());
    errors.add(field, error);
}

/// Trim an optional text field, mapping empty input to absence.
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
