//! Wire CLI arguments into the rebase orchestrator.

use anyhow::{Context, Result};
use tracing::info;

use ncbump_rebase::{RebaseConfig, rebase, render};
use ncbump_time::{SystemClock, parse_instant};

use crate::cli::Cli;

/// Run a rebase from parsed CLI arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;

    let outcome = rebase(&config, &SystemClock)?;

    if let Some(ref rows) = outcome.diff {
        print!("{}", render(rows));
    }

    if outcome.dry_run {
        info!(n = outcome.n_samples, "dry run complete, file unchanged");
    } else {
        info!(n = outcome.n_samples, "time axis updated");
    }
    Ok(())
}

/// Build the immutable run configuration, parsing the instant strings at
/// this boundary so the core only ever sees valid timestamps.
fn build_config(cli: &Cli) -> Result<RebaseConfig> {
    let mut config = RebaseConfig::new(&cli.input_file)
        .with_dry_run(cli.dry_run)
        .with_report_diff(cli.verbose >= 2);

    if let Some(ref output) = cli.output_file {
        config = config.with_output(output);
    } else {
        info!("no output file provided, input file used");
    }
    if let Some(step) = cli.time_step {
        config = config.with_time_step(step);
    }
    if let Some(ref s) = cli.start_time {
        let start = parse_instant(s).with_context(|| format!("invalid --start-time {s:?}"))?;
        config = config.with_start_time(start);
    }
    if let Some(ref s) = cli.create_time {
        let stamp = parse_instant(s).with_context(|| format!("invalid --create-time {s:?}"))?;
        config = config.with_create_time(stamp);
    }

    Ok(config)
}
