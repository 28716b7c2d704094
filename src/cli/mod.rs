//! CLI module for fieldcheck
//!
//! Provides the command-line interface:
//! - validate: one-shot validation of an instance file
//! - types: list catalog types
//! - serve: boot the HTTP status service

mod args;
mod catalog;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use catalog::builtin_registry;
pub use commands::{run_command, serve, types, validate, EXIT_INVALID, EXIT_VALID};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<i32> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
