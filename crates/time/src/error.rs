//! Error types for the ncbump-time crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the ncbump-time crate.
///
/// This enum covers CF `units` attribute parsing, calendar-name validation,
/// codec range failures, and the data errors raised when an existing time
/// axis is too short or empty to rebase.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a `units` attribute is not of the form `<unit> since <epoch>`.
    #[error("invalid time units '{units}': {reason}")]
    InvalidUnits {
        /// The units string as read from the file.
        units: String,
        /// Description of what failed to parse.
        reason: String,
    },

    /// Returned when a calendar name is not one the codec can interpret.
    #[error("unsupported calendar: '{calendar}'")]
    UnsupportedCalendar {
        /// The calendar name as read from the file.
        calendar: String,
    },

    /// Returned when a numeric offset lands outside the representable
    /// datetime range.
    #[error("time offset {offset} out of range for epoch {epoch}")]
    TimestampOutOfRange {
        /// Offset in the axis's declared units, relative to `epoch`.
        offset: f64,
        /// Epoch (or anchor) the offset was applied to.
        epoch: NaiveDateTime,
    },

    /// Returned when no user step is given and the axis has fewer than two
    /// samples to derive one from.
    #[error("time axis has {len} sample(s); need at least 2 to derive a time step")]
    InsufficientData {
        /// Number of samples in the axis.
        len: usize,
    },

    /// Returned when the existing axis is empty and no explicit start
    /// instant was supplied.
    #[error("time axis is empty; cannot derive a start instant")]
    InvalidDateList,

    /// Returned when a user-supplied instant string does not match
    /// `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("failed to parse '{input}': required format YYYY-MM-DDTHH:MM:SSZ")]
    InvalidInstant {
        /// The string that failed to parse.
        input: String,
    },
}
