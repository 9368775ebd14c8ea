use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gauss_solver::{
    session::{Session, SessionConfig, NO_UNIQUE_SOLUTION},
    solve_system, AugmentedMatrix, RowSwapPolicy, SolveError,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of equations (and unknowns); asked interactively when omitted.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub equations: Option<u32>,

    /// Solve a single system given as rows of integers, e.g. "1,2,4;2,1,4".
    #[arg(short, long, conflicts_with = "equations")]
    pub system: Option<String>,

    /// Which row receives a pivot found further down the matrix.
    #[arg(short, long, value_enum, default_value_t = RowSwapPolicy::TargetRow)]
    pub row_swap: RowSwapPolicy,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Exit status for a system that has no unique solution.
const SINGULAR_EXIT_CODE: i32 = 2;

fn solve_one_system(system: &str, policy: RowSwapPolicy) -> Result<bool> {
    let mut matrix = AugmentedMatrix::parse_system(system).context("parsing --system")?;
    log::debug!("solving:\n{matrix}");
    match solve_system(&mut matrix, policy) {
        Ok(solutions) => {
            for solution in solutions {
                println!("{solution}");
            }
            Ok(true)
        }
        Err(SolveError::NoUniqueSolution { column }) => {
            log::debug!("no pivot for column {column}");
            println!("{NO_UNIQUE_SOLUTION}");
            Ok(false)
        }
        Err(err @ SolveError::DegenerateColumn { .. }) => Err(err).context("validating --system"),
    }
}

fn run_interactive_session(args: &Args) -> Result<()> {
    let config = SessionConfig {
        equations: args.equations.map(|n| n as usize),
        policy: args.row_swap,
    };
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run().context("running interactive session")?;
    log::debug!("solved {} system(s)", session.solved_systems());
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();
    log::debug!("Running with: {args:?}");
    let outcome = match &args.system {
        Some(system) => solve_one_system(system, args.row_swap),
        None => run_interactive_session(&args).map(|_| true),
    };
    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(SINGULAR_EXIT_CODE),
        Err(err) => {
            eprintln!("ran into solver error: {err:?}");
            process::exit(1)
        }
    }
}
