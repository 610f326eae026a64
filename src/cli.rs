use std::path::PathBuf;

use clap::Parser;

/// Rebase the time axis of a NetCDF file so it begins now.
#[derive(Parser)]
#[command(
    name = "ncbump",
    version,
    about = "Rewrite a NetCDF time axis to start now, preserving sample spacing"
)]
pub struct Cli {
    /// Path to the input NetCDF file.
    #[arg(short, long)]
    pub input_file: PathBuf,

    /// Path for the rewritten file (input is modified in place if omitted).
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Print the old and new times instead of modifying the file.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Amount of time between time slices in seconds.
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..))]
    pub time_step: Option<i64>,

    /// ISO formatted time (YYYY-MM-DDTHH:MM:SSZ) which the new times will
    /// begin from.
    #[arg(short, long)]
    pub start_time: Option<String>,

    /// ISO formatted time (YYYY-MM-DDTHH:MM:SSZ) to record as the dataset's
    /// creation time.
    #[arg(long)]
    pub create_time: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
