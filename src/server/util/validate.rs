//! Field validation helpers used when converting request DTOs into field sets.

use crate::server::error::AppError;

/// Rejects a supplied text value that is empty or only whitespace.
///
/// Absent keys and explicit `null` pass through unchanged.
///
/// # Arguments
/// - `field` - Field name as seen by API clients, used in the error message
/// - `value` - The field from the request
///
/// # Returns
/// - `Ok(Option<Option<String>>)` - The value unchanged
/// - `Err(AppError::BadRequest)` - The value was supplied but blank
pub fn non_blank(
    field: &str,
    value: Option<Option<String>>,
) -> Result<Option<Option<String>>, AppError> {
    match value {
        Some(Some(v)) if v.trim().is_empty() => Err(AppError::BadRequest(format!(
            "{} must not be blank",
            field
        ))),
        other => Ok(other),
    }
}

/// Narrows an unsigned count into the store's signed 32-bit integer column.
///
/// # Returns
/// - `Ok(Option<Option<i32>>)` - The value fits the column, or was absent or `null`
/// - `Err(AppError::BadRequest)` - The value exceeds `i32::MAX`
pub fn column_int(
    field: &str,
    value: Option<Option<u32>>,
) -> Result<Option<Option<i32>>, AppError> {
    value
        .map(|inner| {
            inner
                .map(|v| {
                    i32::try_from(v).map_err(|_| {
                        AppError::BadRequest(format!("{} must be at most {}", field, i32::MAX))
                    })
                })
                .transpose()
        })
        .transpose()
}
