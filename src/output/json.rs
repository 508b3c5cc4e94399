//! JSON output formatting for repset.

use serde::Serialize;

use crate::error::RepsetError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `RepsetError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RepsetError> {
    Ok(serde_json::to_string_pretty(value)?)
}
