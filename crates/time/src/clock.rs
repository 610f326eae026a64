//! Injectable source of the current instant.

use chrono::{NaiveDateTime, Utc};

/// Source of "now", injectable so sequence generation is deterministic
/// under test.
pub trait Clock {
    /// Current instant as a naive datetime in UTC.
    fn now_utc(&self) -> NaiveDateTime;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now_utc(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let instant = NaiveDate::from_ymd_opt(2023, 5, 10)
            .unwrap()
            .and_hms_opt(12, 34, 56)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now_utc(), instant);
        assert_eq!(clock.now_utc(), instant);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let a = SystemClock.now_utc();
        let b = SystemClock.now_utc();
        assert!(b >= a);
    }
}
