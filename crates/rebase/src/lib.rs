//! # ncbump-rebase
//!
//! Orchestrates a rebase run end to end: open the dataset, decode its time
//! axis, resolve the step, generate the replacement axis, and either write
//! it back or report the would-be change. The pieces it coordinates live in
//! `ncbump-time` (pure arithmetic) and `ncbump-io` (NetCDF access).

mod config;
mod diff;
mod error;
mod rebase;

pub use config::RebaseConfig;
pub use diff::{DiffRow, diff_rows, render};
pub use error::RebaseError;
pub use rebase::{RebaseOutcome, rebase};
