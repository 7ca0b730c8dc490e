//! Command-line parsing for the exponential-sum curve plotter.
//!
//! The goal of this module is to keep **argument parsing** and **input
//! validation** separate from the curve math: everything user-facing
//! (date formats, defaulting to today, output locations) is resolved here
//! and the rest of the crate only sees validated values.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::AppError;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "expsum", version, about = "Exponential sum curve plotter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plot the daily curves for a calendar date range.
    ///
    /// Each date contributes the tuple (month, day, year mod 100); output is
    /// grouped into <save-to>/<year>/<month>/ folders.
    Days(DaysArgs),
    /// Plot the curve for arbitrary positive integers.
    Nums(NumsArgs),
}

/// Options for the date-range mode.
#[derive(Debug, Parser, Clone)]
pub struct DaysArgs {
    /// First date (YYYY-MM-DD). Defaults to today.
    #[arg(short = 'f', long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last date (YYYY-MM-DD). Defaults to today.
    #[arg(short = 't', long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Root directory for the generated images. Defaults to the current directory.
    #[arg(short = 's', long = "save-to", value_name = "DIR")]
    pub save_to: Option<PathBuf>,

    /// Composite six days per image instead of one image per day.
    #[arg(short = 'm', long, conflicts_with = "animate")]
    pub multi: bool,

    /// Render an animated GIF per day instead of a static plot.
    #[arg(short = 'a', long)]
    pub animate: bool,

    /// Figure size; the canvas is size x 100 pixels square.
    #[arg(long, default_value_t = 5)]
    pub size: u32,
}

/// Options for the free-number mode.
#[derive(Debug, Parser, Clone)]
pub struct NumsArgs {
    /// Positive integers parameterizing the curve.
    ///
    /// Negative values parse (so the validation error can name them) but are
    /// rejected before any curve is generated.
    #[arg(value_name = "N", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Plot every permutation of the numbers, six per image.
    #[arg(short = 'p', long, conflicts_with = "animate")]
    pub permutations: bool,

    /// Render an animated GIF instead of a static plot.
    #[arg(short = 'a', long)]
    pub animate: bool,

    /// Directory for the generated images. Defaults to the current directory.
    #[arg(short = 's', long = "save-to", value_name = "DIR")]
    pub save_to: Option<PathBuf>,

    /// Figure size; the canvas is size x 100 pixels square.
    #[arg(long, default_value_t = 5)]
    pub size: u32,
}

/// Resolve the date range of a `days` invocation.
///
/// Missing endpoints default to *today*, looked up at call time so a
/// long-running wrapper never captures a stale date at startup. The
/// `to >= from` check happens here so the scheduler can assume an ordered
/// range.
pub fn resolve_date_range(args: &DaysArgs) -> Result<(NaiveDate, NaiveDate), AppError> {
    let today = chrono::Local::now().date_naive();
    let start = match &args.from {
        Some(text) => parse_date(text, "from")?,
        None => today,
    };
    let end = match &args.to {
        Some(text) => parse_date(text, "to")?,
        None => today,
    };
    if end < start {
        return Err(AppError::new(
            1,
            "Error: to-date has to be equal or after from-date!",
        ));
    }
    Ok((start, end))
}

/// Resolve an optional `--save-to` into a concrete directory.
pub fn resolve_save_to(save_to: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match save_to {
        Some(dir) => Ok(dir),
        None => std::env::current_dir()
            .map_err(|e| AppError::new(2, format!("Cannot determine current directory: {e}"))),
    }
}

fn parse_date(text: &str, which: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        AppError::new(
            1,
            format!("Error: wrong {which}-date format: required is YYYY-MM-DD!"),
        )
    })
}
