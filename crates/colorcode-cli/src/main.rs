//! colorcode - convert colors between notations
//!
//! Entry point for the command line tool.

mod cli;
mod report;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colorcode_core::{Color, Notation};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::Cli;
use crate::report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let count = run(&cli, io::stdin().lock(), io::stdout().lock())?;
    info!(count, "converted colors");
    Ok(())
}

/// Convert the colors named on the command line, or each non-blank line of
/// `input` when none are given. Stops at the first color that fails.
fn run(cli: &Cli, input: impl BufRead, mut out: impl Write) -> Result<usize> {
    let inputs = if cli.colors.is_empty() {
        info!("reading colors from stdin");
        input
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read stdin")?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.colors.clone()
    };

    let only = cli.to.map(Notation::from);
    for input in &inputs {
        let report = convert(input)?;
        if cli.json {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        } else {
            for line in report.lines(only) {
                writeln!(out, "{line}")?;
            }
        }
    }
    out.flush()?;

    Ok(inputs.len())
}

fn convert(input: &str) -> Result<Report> {
    let color: Color = input
        .parse()
        .with_context(|| format!("could not parse color {input:?}"))?;
    debug!(%color, notation = %color.notation(), "parsed");
    Report::new(input, &color).with_context(|| format!("could not convert {input:?}"))
}
