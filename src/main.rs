//! fieldcheck CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Prints errors to stderr
//! 4. Exits with the command's exit code (2 on configuration failure)
//!
//! All logic is delegated to the CLI module; nothing is initialized here.

use std::process;

use fieldcheck::cli;

fn main() {
    match cli::run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}
