//! Boundary parsing for user-supplied instants.

use chrono::NaiveDateTime;

use crate::error::TimeError;

/// Parse an explicit start or creation instant.
///
/// Accepts exactly `YYYY-MM-DDTHH:MM:SSZ`. The trailing `Z` is a fixed
/// marker, not a timezone conversion; the result is naive and
/// UTC-anchored by convention.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%SZ").map_err(|_| {
        TimeError::InvalidInstant {
            input: input.to_string(),
        }
    })
}
