//! Parsing of raw query-string values into typed parameters.
//!
//! Query parameters arrive as strings so that a malformed value can be
//! reported with the parameter name instead of a generic extractor error.

use crate::error::CoreError;

/// Parse an optional integer parameter.
///
/// Absent values yield `Ok(None)`. Surrounding whitespace is ignored.
pub fn parse_integer(name: &str, raw: Option<&str>) -> Result<Option<i64>, CoreError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::Validation(format!("{name} must be an integer")))
    })
    .transpose()
}

/// Parse an integer parameter that must be at least 1, falling back to
/// `default` when absent.
pub fn parse_positive(name: &str, raw: Option<&str>, default: i64) -> Result<i64, CoreError> {
    let value = parse_integer(name, raw)?.unwrap_or(default);
    if value < 1 {
        return Err(CoreError::Validation(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(value)
}
