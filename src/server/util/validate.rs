use crate::server::error::AppError;

/// Rejects a name that is empty or only whitespace.
///
/// The name itself is not trimmed; it is stored as sent.
///
/// # Returns
/// - `Ok(())` - Name has visible characters
/// - `Err(AppError::BadRequest)` - Name is blank
pub fn require_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Applies `require_name` to every entry of a list.
pub fn require_names(field: &str, values: &[String]) -> Result<(), AppError> {
    values.iter().try_for_each(|value| require_name(field, value))
}
