//! Rebase orchestration: read, resolve, generate, encode, write.

use std::path::PathBuf;

use tracing::{info, warn};

use ncbump_io::{
    copy_dataset, open_dataset, read_time_axis, replace_time_values, set_creation_attrs,
};
use ncbump_time::{
    Calendar, CfUnits, Clock, decode_times, encode_times, generate_sequence, resolve_delta,
};

use crate::config::RebaseConfig;
use crate::diff::{DiffRow, diff_rows};
use crate::error::RebaseError;

/// Outcome of a successful rebase run.
#[derive(Debug, Clone)]
pub struct RebaseOutcome {
    /// Number of samples in the rewritten (or would-be rewritten) axis.
    pub n_samples: usize,
    /// Whether the run stopped short of writing.
    pub dry_run: bool,
    /// Old→new listing; present for dry runs and when diff reporting was
    /// requested.
    pub diff: Option<Vec<DiffRow>>,
}

/// Rebase the time axis of the configured dataset.
///
/// Reads the existing axis, decodes it, resolves the step, generates the
/// replacement sequence, and encodes it against the file's own units and
/// calendar — the declared epoch is never altered. On a dry run nothing is
/// written; otherwise the values are replaced in a single put and the
/// creation-time attributes are updated best-effort.
///
/// The dataset handle is released on every exit path when it drops.
pub fn rebase(config: &RebaseConfig, clock: &dyn Clock) -> Result<RebaseOutcome, RebaseError> {
    let target = resolve_target(config)?;
    let mut file = open_dataset(&target)?;

    let axis = read_time_axis(&file, &target)?;
    let units = CfUnits::parse(&axis.units)?;
    let calendar = Calendar::parse(&axis.calendar)?;
    let old_times = decode_times(&axis.values, &units, calendar)?;
    info!(n = old_times.len(), units = %axis.units, "existing time axis decoded");

    let delta = resolve_delta(&old_times, config.time_step())?;
    let new_times = generate_sequence(&old_times, delta, config.start_time(), clock)?;
    let encoded = encode_times(&new_times, &units, calendar);

    let diff = if config.dry_run() || config.report_diff() {
        diff_rows(&old_times, &new_times)
    } else {
        None
    };

    if config.dry_run() {
        info!("dry run: leaving dataset untouched");
        return Ok(RebaseOutcome {
            n_samples: new_times.len(),
            dry_run: true,
            diff,
        });
    }

    replace_time_values(&mut file, &encoded, &target)?;

    let stamp = config.create_time().unwrap_or_else(|| clock.now_utc());
    // Attribute schemas vary between producers; a failed attribute write
    // must not abort a run whose axis rewrite already succeeded.
    if let Err(e) = set_creation_attrs(&mut file, stamp) {
        warn!(error = %e, "failed to set creation attributes");
    }

    info!(n = encoded.len(), path = %target.display(), "time axis rewritten");
    Ok(RebaseOutcome {
        n_samples: encoded.len(),
        dry_run: false,
        diff,
    })
}

/// Decide which file to open: the input itself, or a fresh copy at the
/// output path. Dry runs always inspect the input and never copy.
fn resolve_target(config: &RebaseConfig) -> Result<PathBuf, RebaseError> {
    match config.output() {
        Some(output) if !config.dry_run() => {
            copy_dataset(config.input(), output)?;
            Ok(output.to_path_buf())
        }
        _ => Ok(config.input().to_path_buf()),
    }
}
