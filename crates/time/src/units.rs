//! CF-convention time units: `"<unit> since <epoch>"`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimeError;

/// Base unit of a CF time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Length of one unit in seconds.
    pub fn in_seconds(self) -> i64 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 3_600,
            TimeUnit::Days => 86_400,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seconds" | "second" | "secs" | "sec" => Some(TimeUnit::Seconds),
            "minutes" | "minute" | "mins" | "min" => Some(TimeUnit::Minutes),
            "hours" | "hour" | "hrs" | "hr" => Some(TimeUnit::Hours),
            "days" | "day" => Some(TimeUnit::Days),
            _ => None,
        }
    }
}

/// Parsed form of a CF `units` attribute.
///
/// Only the unit and epoch are kept; the file's original units string is
/// carried separately by the caller and written back unchanged, so the
/// declared epoch is never altered by a rebase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CfUnits {
    unit: TimeUnit,
    epoch: NaiveDateTime,
}

impl CfUnits {
    /// Parse a units string like `"days since 2000-01-01"` or
    /// `"seconds since 2000-01-01 06:00:00"`.
    ///
    /// The epoch time-of-day is optional and defaults to midnight. Trailing
    /// fractional seconds or timezone markers after `HH:MM:SS` are ignored.
    pub fn parse(units: &str) -> Result<Self, TimeError> {
        let invalid = |reason: &str| TimeError::InvalidUnits {
            units: units.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = units.splitn(3, ' ').collect();
        if parts.len() < 3 || parts[1] != "since" {
            return Err(invalid("expected '<unit> since <epoch>'"));
        }

        let unit = TimeUnit::parse(parts[0]).ok_or_else(|| invalid("unknown unit"))?;

        // Date portion is the first 10 characters of the epoch.
        let epoch_str = parts[2];
        let date_str = if epoch_str.len() >= 10 {
            &epoch_str[..10]
        } else {
            epoch_str
        };
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| invalid("epoch date is not YYYY-MM-DD"))?;

        // Optional time-of-day portion after the date.
        let rest = epoch_str[date_str.len()..].trim_start_matches([' ', 'T']);
        let time = if rest.is_empty() {
            NaiveTime::MIN
        } else {
            let time_str = if rest.len() > 8 { &rest[..8] } else { rest };
            NaiveTime::parse_from_str(time_str, "%H:%M:%S")
                .map_err(|_| invalid("epoch time is not HH:MM:SS"))?
        };

        Ok(CfUnits {
            unit,
            epoch: NaiveDateTime::new(date, time),
        })
    }

    /// Base unit of the axis.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Epoch the numeric offsets count from.
    pub fn epoch(&self) -> NaiveDateTime {
        self.epoch
    }
}
