//! thermoconv CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to a one-shot
//! conversion, the example listing or the interactive prompt, and exit with the
//! appropriate status. For programmatic use, prefer the library API (`thermoconv::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
