//! # Main — CLI Entry Point and Solver Dispatch
//!
//! Routes CLI subcommands to the solver registry. The entry point stays
//! slim: argument parsing, logging setup and the rayon pool live here, the
//! execution logic for each subcommand lives in `cli`.
//!
//! ## Subcommands
//!
//! - `solve <N>` — run one solver and print its answer.
//! - `all` — run every registered solver in order, with timings.
//! - `verify [--problem N]` — compare solver output against the recorded
//!   answers.
//! - `list` — enumerate the registered problems.
//!
//! ## Global Options
//!
//! - `--data-dir` / `EULER_DATA`: directory with the static puzzle inputs.
//! - `--json`: machine-readable answer records on stdout.
//! - `--threads`: rayon thread pool size (defaults to all logical cores).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "euler", about = "Solve Project Euler problems by number")]
struct Cli {
    /// Directory containing the static puzzle input files
    #[arg(long, env = "EULER_DATA", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Emit machine-readable JSON answer records on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single problem and print its answer
    Solve {
        /// Problem number (e.g. 24)
        number: u32,
    },
    /// Solve every registered problem in order
    All,
    /// Run solvers and compare their answers against the recorded ones
    Verify {
        /// Restrict verification to a single problem
        #[arg(long)]
        problem: Option<u32>,
    },
    /// List the registered problems
    List,
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine consumption, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    match &cli.command {
        Commands::Solve { number } => cli::run_solve(&cli, *number),
        Commands::All => cli::run_all(&cli),
        Commands::Verify { problem } => cli::run_verify(&cli, *problem),
        Commands::List => cli::run_list(),
    }
}
