//! Parsing helpers for string-typed query parameters.

use crate::server::error::validation::ValidationError;

/// Treats an empty parameter value the same as an absent one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Returns true only for the exact literal `true`.
pub fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Parses the `qty` parameter.
///
/// Surrounding whitespace is ignored. Error messages echo the value as sent.
///
/// # Returns
/// - `Ok(u64)` - Number of servers to keep
/// - `Err(ValidationError::InvalidQuantity)` - Value is not a non-negative integer
pub fn parse_quantity(value: &str) -> Result<u64, ValidationError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidQuantity(value.to_string()))
}

/// Parses the `by_serverid` parameter.
///
/// A value that is not an id cannot match any server, so it reports the same
/// not-found error as an unknown id. Surrounding whitespace is ignored, while the
/// error message echoes the value as sent.
///
/// # Returns
/// - `Ok(i32)` - Server id
/// - `Err(ValidationError::ServerNotFound)` - Value is not a valid id
pub fn parse_server_id(value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::ServerNotFound(value.to_string()))
}
