//! texpack CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the packing
//! sequence, and exit with status 0 on success or 1 with a message on failure.
//! For programmatic use, prefer the library API (`texpack::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
