//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldcheck validate --type <name> --instance <file>
//! - fieldcheck types
//! - fieldcheck serve [--host <h>] [--port <p>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldcheck - A strict, deterministic object-validation engine
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one instance file against a catalog type
    Validate {
        /// Type name to validate against
        #[arg(long = "type")]
        type_name: String,

        /// Path to the instance JSON file
        #[arg(long)]
        instance: PathBuf,
    },

    /// List catalog types and their constraint counts
    Types,

    /// Start the HTTP status service
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
