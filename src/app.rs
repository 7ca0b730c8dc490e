//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves dates and output locations
//! - builds the render jobs
//! - fans them out over the worker pool

use clap::Parser;

use crate::cli::{Command, DaysArgs, NumsArgs};
use crate::domain::{JobKind, RunConfig};
use crate::error::AppError;
use crate::schedule;

pub mod pipeline;

/// Entry point for the `expsum` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `expsum` (and `expsum -f 2024-01-01 ...`) to behave like
    // `expsum days ...`, and `expsum 2 3 5` to behave like `expsum nums 2 3 5`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the short invocations convenient.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Days(args) => handle_days(args),
        Command::Nums(args) => handle_nums(args),
    }
}

fn handle_days(args: DaysArgs) -> Result<(), AppError> {
    let (start, end) = crate::cli::resolve_date_range(&args)?;
    let root = crate::cli::resolve_save_to(args.save_to)?;

    let kind = if args.multi {
        JobKind::Grid
    } else if args.animate {
        JobKind::Animate
    } else {
        JobKind::Plot
    };
    let jobs = schedule::date_jobs(start, end, &root, kind)?;

    let config = RunConfig {
        size: args.size,
        margin: 0.0,
        // Animations are expensive per job, so the pool pays off sooner.
        parallel_threshold: if args.animate { 5 } else { 12 },
        ..RunConfig::default()
    };

    let what = if args.animate { "animations" } else { "plots" };
    println!("Exponential sum {what} from {start} to {end} ...");
    pipeline::run_jobs(&jobs, &config)?;
    println!("... finished.");
    Ok(())
}

fn handle_nums(args: NumsArgs) -> Result<(), AppError> {
    let root = crate::cli::resolve_save_to(args.save_to)?;

    let jobs = if args.permutations {
        schedule::permutation_jobs(&args.numbers, &root)?
    } else {
        vec![schedule::number_job(&args.numbers, &root, args.animate)?]
    };

    let config = RunConfig {
        size: args.size,
        // Free-number plots pad the window slightly.
        margin: 0.5,
        ..RunConfig::default()
    };

    let ns = args
        .numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if args.permutations {
        println!("Exponential sum plots for all permutations of {ns} ...");
    } else if args.animate {
        println!("Exponential sum animation for {ns} ...");
    } else {
        println!("Exponential sum plot for {ns} ...");
    }
    pipeline::run_jobs(&jobs, &config)?;
    println!("... finished.");
    Ok(())
}

/// Rewrite argv so the subcommand can be omitted.
///
/// Rules:
/// - `expsum`                      -> `expsum days` (today's plot)
/// - `expsum -f 2024-01-01 ...`    -> `expsum days -f 2024-01-01 ...`
/// - `expsum 2 3 5 ...`            -> `expsum nums 2 3 5 ...`
/// - `expsum --help/--version/-h`  -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("days".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "days" | "nums");
    if is_subcommand {
        return argv;
    }

    // A leading integer means a number tuple (this also catches negative
    // values, which then fail validation with a proper message).
    if arg1.parse::<i64>().is_ok() {
        argv.insert(1, "nums".to_string());
        return argv;
    }

    // If the first token is a flag, treat it as "days flags".
    if arg1.starts_with('-') {
        argv.insert(1, "days".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
