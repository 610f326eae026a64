mod cli;
mod logging;
mod rebase_cmd;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = rebase_cmd::run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
