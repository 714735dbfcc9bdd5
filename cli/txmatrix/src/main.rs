//! txmatrix: build-matrix generator for Transmission packaging CI.
//!
//! Run with no arguments to print the `include` matrix for the shipped
//! version table.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "txmatrix",
    version,
    about = "Generate the CI build matrix for Transmission packages"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the build matrix (the default when no subcommand is given)
    Generate {
        /// Version table file (default: the shipped table)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output format (yaml, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Summarize the versions, tiers and operating systems in a table
    List {
        /// Version table file (default: the shipped table)
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Validate a version table
    Check {
        /// Version table file (default: the shipped table)
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => commands::generate::run(None, None),

        Some(Commands::Generate { table, format }) => {
            commands::generate::run(table.as_deref(), format.as_deref())
        }

        Some(Commands::List { table }) => commands::list::run(table.as_deref()),

        Some(Commands::Check { table }) => commands::check::run(table.as_deref()),
    }
}
