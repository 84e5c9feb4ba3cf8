//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand: single-solver dispatch, the
//! run-everything loop, answer verification, and rayon configuration.

use std::time::Instant;

use anyhow::{bail, Result};
use euler::registry::{self, Context, Solver};
use serde::Serialize;
use tracing::{error, info, warn};

use super::Cli;

/// Answer record for `--json` output, one object per line.
#[derive(Serialize)]
struct AnswerRecord<'a> {
    problem: u32,
    title: &'a str,
    answer: &'a str,
    elapsed_ms: u64,
}

pub fn configure_rayon(threads: Option<usize>) {
    let Some(num_threads) = threads else {
        return; // rayon's default pool uses all logical cores
    };
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => info!(threads = num_threads, "rayon thread pool configured"),
        Err(e) => warn!(error = %e, "could not configure rayon thread pool"),
    }
}

fn solve_timed(solver: &Solver, ctx: &Context) -> Result<(String, u64)> {
    let started = Instant::now();
    let answer = (solver.run)(ctx)?;
    Ok((answer, started.elapsed().as_millis() as u64))
}

fn emit(cli: &Cli, solver: &Solver, answer: &str, elapsed_ms: u64) -> Result<()> {
    if cli.json {
        let record = AnswerRecord {
            problem: solver.number,
            title: solver.title,
            answer,
            elapsed_ms,
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        info!(problem = solver.number, elapsed_ms, "solved");
        println!("{answer}");
    }
    Ok(())
}

pub fn run_solve(cli: &Cli, number: u32) -> Result<()> {
    let Some(solver) = registry::find(number) else {
        error!(problem = number, "no such problem in the registry");
        bail!("problem {number} is not registered (see `euler list`)");
    };
    let ctx = Context::new(cli.data_dir.clone());
    let (answer, elapsed_ms) = solve_timed(solver, &ctx)?;
    emit(cli, solver, &answer, elapsed_ms)
}

/// Run every registered solver. Individual failures (typically a missing
/// input file) are reported and counted but do not stop the run; any
/// failure makes the exit code non-zero.
pub fn run_all(cli: &Cli) -> Result<()> {
    let ctx = Context::new(cli.data_dir.clone());
    let mut failures = 0u32;
    for solver in registry::SOLVERS {
        match solve_timed(solver, &ctx) {
            Ok((answer, elapsed_ms)) => {
                if cli.json {
                    emit(cli, solver, &answer, elapsed_ms)?;
                } else {
                    info!(problem = solver.number, elapsed_ms, "solved");
                    println!("{:>3}  {:<32} {answer}", solver.number, solver.title);
                }
            }
            Err(e) => {
                error!(problem = solver.number, "solver failed: {e:#}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} solver(s) failed");
    }
    Ok(())
}

pub fn run_verify(cli: &Cli, problem: Option<u32>) -> Result<()> {
    let ctx = Context::new(cli.data_dir.clone());
    let selected: Vec<&Solver> = match problem {
        Some(number) => match registry::find(number) {
            Some(solver) => vec![solver],
            None => {
                error!(problem = number, "no such problem in the registry");
                bail!("problem {number} is not registered (see `euler list`)");
            }
        },
        None => registry::SOLVERS.iter().collect(),
    };

    let mut mismatches = 0u32;
    let mut failures = 0u32;
    for solver in selected {
        match solve_timed(solver, &ctx) {
            Ok((answer, elapsed_ms)) if answer == solver.expected => {
                info!(problem = solver.number, elapsed_ms, "verified");
                println!("{:>3}  ok     {answer}", solver.number);
            }
            Ok((answer, _)) => {
                error!(
                    problem = solver.number,
                    got = %answer,
                    expected = solver.expected,
                    "answer mismatch"
                );
                println!(
                    "{:>3}  FAIL   got {answer}, expected {}",
                    solver.number, solver.expected
                );
                mismatches += 1;
            }
            Err(e) => {
                error!(problem = solver.number, "solver failed: {e:#}");
                println!("{:>3}  ERROR  {e:#}", solver.number);
                failures += 1;
            }
        }
    }
    if mismatches > 0 || failures > 0 {
        bail!("verification failed: {mismatches} mismatch(es), {failures} error(s)");
    }
    Ok(())
}

pub fn run_list() -> Result<()> {
    for solver in registry::SOLVERS {
        println!("{:>3}  {}", solver.number, solver.title);
    }
    Ok(())
}
