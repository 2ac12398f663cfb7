use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Leniently parses a positive integer from a query string value.
///
/// Integers are accepted as-is, decimal values are truncated toward zero, and
/// surrounding whitespace is ignored.
///
/// # Arguments
/// - `value` - The raw value, if the parameter was present
///
/// # Returns
/// - `Some(u64)` - A value of at least 1
/// - `None` - Missing, non-numeric, zero or negative input
pub fn parse_positive_u64(value: Option<&str>) -> Option<u64> {
    let value = value?.trim();

    let parsed = match value.parse::<i64>() {
        Ok(int) => int,
        Err(_) => {
            let float = value.parse::<f64>().ok().filter(|f| f.is_finite())?;
            float.trunc() as i64
        }
    };

    u64::try_from(parsed).ok().filter(|v| *v >= 1)
}

/// Trims a text value and rejects it when nothing remains.
///
/// # Returns
/// - `Some(String)` - The trimmed, non-empty value
/// - `None` - Missing or blank input
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an optional enum filter from its wire name.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - Raw value; blank counts as absent
///
/// # Returns
/// - `Ok(None)` - Parameter absent or blank
/// - `Ok(Some(E))` - Value matched a variant
/// - `Err(AppError::Validation)` - Value is not a known variant
pub fn parse_enum_filter<E>(name: &str, value: Option<&str>) -> Result<Option<E>, AppError>
where
    E: ActiveEnum<Value = String>,
{
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    E::try_from_value(&value.to_string())
        .map(Some)
        .map_err(|_| AppError::Validation(format!("Invalid {} filter '{}'", name, value)))
}
