//! Immutable run configuration for the rebase orchestrator.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Configuration for a single rebase run.
///
/// Built once at the CLI boundary and passed in explicitly; the core never
/// consults process-wide state.
#[derive(Debug, Clone)]
pub struct RebaseConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    time_step: Option<i64>,
    start_time: Option<NaiveDateTime>,
    create_time: Option<NaiveDateTime>,
    dry_run: bool,
    report_diff: bool,
}

impl RebaseConfig {
    /// Create a configuration for rebasing `input` in place, with no user
    /// step, no explicit start, and writing enabled.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            time_step: None,
            start_time: None,
            create_time: None,
            dry_run: false,
            report_diff: false,
        }
    }

    /// Write to `output` instead of mutating the input in place.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Use a fixed step of `seconds` instead of deriving one from the axis.
    ///
    /// The boundary is responsible for rejecting non-positive values before
    /// building the configuration.
    pub fn with_time_step(mut self, seconds: i64) -> Self {
        self.time_step = Some(seconds);
        self
    }

    /// Anchor the new axis at `start` instead of today's date.
    pub fn with_start_time(mut self, start: NaiveDateTime) -> Self {
        self.start_time = Some(start);
        self
    }

    /// Record `stamp` as the dataset's creation time instead of "now".
    pub fn with_create_time(mut self, stamp: NaiveDateTime) -> Self {
        self.create_time = Some(stamp);
        self
    }

    /// Compute and report the change without writing it.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Produce the old→new diff even on a real (non-dry) run.
    pub fn with_report_diff(mut self, report_diff: bool) -> Self {
        self.report_diff = report_diff;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn time_step(&self) -> Option<i64> {
        self.time_step
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time
    }

    pub fn create_time(&self) -> Option<NaiveDateTime> {
        self.create_time
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn report_diff(&self) -> bool {
        self.report_diff
    }
}
