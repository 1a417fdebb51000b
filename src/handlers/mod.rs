// CRUD surface over threads and messages.
//
// Authorization model: every /api route requires a verified bearer token,
// but queries are not scoped to the authenticated subject. Any
// authenticated user can read and modify any thread; per-user ownership is
// deliberately deferred to a future iteration.
pub mod messages;
pub mod threads;

use crate::error::ApiError;

/// Trim a required string field and reject absent or empty-after-trim
/// values with a field-specific 400. The trimmed value is what gets stored.
pub fn required_trimmed(field: &'static str, value: Option<&str>) -> Result<String, ApiError> {
    let value =
        value.ok_or_else(|| ApiError::validation(field, format!("{field} is required")))?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(
            field,
            format!("{field} must not be empty"),
        ));
    }

    Ok(trimmed.to_string())
}
