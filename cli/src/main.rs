//! `lagrange`: print the polynomial through a set of `x,y` points.
//!
//! ```text
//! $ lagrange 1,2 2,5 3,2
//! -7.0 + 12.0x - 3.0x^2
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lagrange_math::prelude::*;
use log::{debug, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "lagrange")]
#[command(version)]
#[command(
    about = "Interpolate the lowest-degree polynomial through a set of points"
)]
struct Args {
    /// Points as `x,y`, e.g. `1,2` or `-0.5, 3`.
    #[arg(value_name = "POINT", required = true, allow_hyphen_values = true)]
    points: Vec<String>,

    /// Decimal places printed for each coefficient (at most 17).
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(..=17)
    )]
    precision: u16,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn init_logger(level: LevelFilter) {
    // RUST_LOG, when set, takes precedence over -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn parse_points(raw: &[String]) -> Result<Vec<Point>> {
    raw.iter()
        .map(|text| {
            text.parse::<Point>()
                .with_context(|| format!("invalid point `{text}`"))
        })
        .collect()
}

fn run(args: &Args) -> Result<()> {
    let points =
        parse_points(&args.points).context("failed to process input")?;
    debug!("parsed {} points", points.len());

    let p = interpolate(&points).context("failed to interpolate polynomial")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{p:.prec$}", prec = usize::from(args.precision))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
