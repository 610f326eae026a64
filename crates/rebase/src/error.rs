//! Error types for ncbump-rebase.

use ncbump_io::IoError;
use ncbump_time::TimeError;

/// Error type for a rebase run.
///
/// Keeps storage failures and time-axis failures in separate variants so
/// callers can tell "the file is bad" apart from "the time axis is bad".
#[derive(Debug, thiserror::Error)]
pub enum RebaseError {
    /// A storage-engine failure: open, read, replace, or copy.
    #[error("storage error: {0}")]
    Io(#[from] IoError),

    /// A time-axis failure: units, calendar, delta, or sequence.
    #[error("time axis error: {0}")]
    Time(#[from] TimeError),
}
