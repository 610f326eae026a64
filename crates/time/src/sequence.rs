//! Replacement time-axis generation anchored at a start instant.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::clock::Clock;
use crate::error::TimeError;

/// Generate the replacement axis: one sample per existing sample, spaced
/// `delta` apart, starting at the anchor.
///
/// The anchor is `start` when supplied. Otherwise it combines today's date
/// (taken from `clock`, in UTC) with the time-of-day of the first existing
/// sample, so the intraday cadence survives while the stale date is
/// discarded.
///
/// `delta` is applied uniformly whatever its sign; a zero or negative delta
/// produces a non-increasing axis by design (see [`resolve_delta`]).
///
/// [`resolve_delta`]: crate::resolve_delta
pub fn generate_sequence(
    existing: &[NaiveDateTime],
    delta: TimeDelta,
    start: Option<NaiveDateTime>,
    clock: &dyn Clock,
) -> Result<Vec<NaiveDateTime>, TimeError> {
    let anchor = match start {
        Some(start) => start,
        None => {
            let first = existing.first().ok_or(TimeError::InvalidDateList)?;
            let today = clock.now_utc().date();
            debug!(date = %today, time = %first.time(), "anchoring at today's UTC date");
            NaiveDateTime::new(today, first.time())
        }
    };

    let mut out = Vec::with_capacity(existing.len());
    let mut current = anchor;
    for idx in 0..existing.len() {
        if idx > 0 {
            current = current.checked_add_signed(delta).ok_or_else(|| {
                TimeError::TimestampOutOfRange {
                    offset: delta.num_seconds() as f64 * idx as f64,
                    epoch: anchor,
                }
            })?;
        }
        out.push(current);
    }
    Ok(out)
}
