//! Time-step resolution between consecutive samples.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::error::TimeError;

/// Resolve the step between consecutive output samples.
///
/// A user-supplied step (in seconds) wins verbatim, regardless of the
/// axis's actual spacing. Otherwise the step is the gap between the first
/// two existing samples, which requires at least two of them.
///
/// A derived step of zero or negative length (duplicate or non-monotonic
/// source samples) is passed through unchanged; rejecting it is the
/// caller's call.
pub fn resolve_delta(
    existing: &[NaiveDateTime],
    user_step_seconds: Option<i64>,
) -> Result<TimeDelta, TimeError> {
    if let Some(seconds) = user_step_seconds {
        debug!(seconds, "using user-provided time step");
        return Ok(TimeDelta::seconds(seconds));
    }

    if existing.len() < 2 {
        return Err(TimeError::InsufficientData {
            len: existing.len(),
        });
    }

    let delta = existing[1] - existing[0];
    debug!(
        seconds = delta.num_seconds(),
        "derived time step from first two samples"
    );
    Ok(delta)
}
