use std::str::FromStr;

use crate::errors::AppError;

/// Parses an optional query value, turning a bad value into a 400.
/// Empty strings count as absent.
pub fn parse_param<T>(name: &str, raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Validation(format!("invalid '{name}' parameter: {e}"))),
    }
}

/// Truncates `items` to `limit` when one is given.
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// Rejects blank required text fields.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}
