//! Command-line surface: argument definitions and dispatch.
//!
//! Thin glue between the argument parser and the library. All
//! user-facing messages and exit codes are decided here; the library
//! only reports what went wrong.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use regression::prelude::*;

#[derive(Debug, Parser)]
#[command(
    name = "regression",
    about = "Ordinary Least Squares (OLS) linear regression analysis.",
    long_about = "Ordinary Least Squares (OLS) linear regression analysis.\n\
                  Calculates the y baseline b and slope m from a set of {x,y} points.",
    after_help = "Examples:\n  \
                  regression 1.0 2.0 2.0 4.0\n  \
                  regression -f data.csv\n  \
                  regression -xf data.csv\n\n\
                  Files can use any non-numeric separator between values."
)]
pub struct Cli {
    /// Parse points from a CSV or other non-digit-separated file
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Swap x and y for every parsed point (combine as -xf FILE)
    #[arg(short = 'x', requires = "file")]
    pub swap: bool,

    /// Coordinate pairs: x1 y1 x2 y2 ...
    #[arg(value_name = "COORD", allow_negative_numbers = true)]
    pub coords: Vec<String>,
}

/// Collect points from the selected source, fit them, and print the
/// report to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let points: Vec<Point<f64>> = match &cli.file {
        Some(path) => DelimitedFileSource::open(path, cli.swap)
            .with_context(|| format!("cannot open '{}'", path.display()))?
            .collect()
            .with_context(|| format!("cannot read data from '{}'", path.display()))?,
        None => {
            if cli.coords.len() < 2 {
                Cli::command().print_help()?;
                process::exit(1);
            }
            ArgPairsSource::new(&cli.coords).collect()?
        }
    };

    let line = fit(&points)?;
    print!("{}", line);
    Ok(())
}
