//! Numeric-offset ↔ calendar-datetime conversion.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::TimeError;
use crate::units::CfUnits;

/// Calendar systems the codec can interpret.
///
/// All supported names are backed by chrono's proleptic Gregorian
/// arithmetic; the names only differ for dates before 1582. Other CF
/// calendars (`noleap`, `360_day`, ...) are rejected rather than silently
/// mis-converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Standard,
    ProlepticGregorian,
}

impl Calendar {
    /// Parse a CF `calendar` attribute value, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, TimeError> {
        match name.to_lowercase().as_str() {
            "standard" | "gregorian" => Ok(Calendar::Standard),
            "proleptic_gregorian" => Ok(Calendar::ProlepticGregorian),
            _ => Err(TimeError::UnsupportedCalendar {
                calendar: name.to_string(),
            }),
        }
    }
}

/// Convert raw numeric offsets into calendar datetimes.
///
/// Each offset is scaled to seconds, rounded to the nearest whole second,
/// and added to the epoch declared in `units`.
pub fn decode_times(
    values: &[f64],
    units: &CfUnits,
    _calendar: Calendar,
) -> Result<Vec<NaiveDateTime>, TimeError> {
    values
        .iter()
        .map(|&value| {
            let out_of_range = || TimeError::TimestampOutOfRange {
                offset: value,
                epoch: units.epoch(),
            };
            let seconds = value * units.unit().in_seconds() as f64;
            if !seconds.is_finite() {
                return Err(out_of_range());
            }
            TimeDelta::try_seconds(seconds.round() as i64)
                .and_then(|delta| units.epoch().checked_add_signed(delta))
                .ok_or_else(out_of_range)
        })
        .collect()
}

/// Convert calendar datetimes back into numeric offsets against the same
/// epoch and unit they were decoded with.
pub fn encode_times(times: &[NaiveDateTime], units: &CfUnits, _calendar: Calendar) -> Vec<f64> {
    let unit_seconds = units.unit().in_seconds() as f64;
    times
        .iter()
        .map(|&t| (t - units.epoch()).num_seconds() as f64 / unit_seconds)
        .collect()
}
