//! Repolens: inspect GitHub repositories from the command line.
//!
//! This is the main entry point for the `repolens` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes. Set `RUST_LOG=debug` to see the requests being made.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod github;
pub mod patch;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
