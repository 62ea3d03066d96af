//! Required-field checks shared by the request DTOs.

use crate::error::CoreError;

/// Returns `true` when a field value counts as absent.
///
/// `None` and the empty string are both missing; whitespace is kept as-is.
pub fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Check `fields` in order and fail on the first one that is missing.
///
/// `message` is the endpoint-level description attached to the error.
pub fn require_fields(
    fields: &[(&'static str, Option<&str>)],
    message: &str,
) -> Result<(), CoreError> {
    match fields.iter().find(|(_, value)| is_missing(*value)) {
        Some((field, _)) => Err(CoreError::MissingField {
            field: *field,
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}
