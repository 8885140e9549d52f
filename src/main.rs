//! Quetelet CLI - BMI calculator and classifier
//!
//! Usage: quetelet [--weight KG --height M] [--json]
//!
//! With no arguments, runs the interactive session: two prompts on stdout,
//! two numbers on stdin, one result. With `--weight`/`--height`, evaluates
//! once without prompting.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use quetelet::cli::Cli;
use quetelet::input::{validate_measurement, Field};
use quetelet::report::{render_json, render_text};
use quetelet::session::{run, SessionOptions};
use quetelet::Reading;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reading = if let (Some(weight), Some(height)) = (cli.weight, cli.height) {
        evaluate_one_shot(weight, height, cli.json)?
    } else {
        run_interactive(cli.json)?
    };

    if cli.verbose > 0 {
        eprintln!(
            "weight={} kg height={} m bmi={}",
            reading.weight, reading.height, reading.bmi
        );
    }

    Ok(())
}

/// Evaluate flag-supplied measurements without prompting.
fn evaluate_one_shot(weight: f64, height: f64, json: bool) -> Result<Reading> {
    validate_measurement(Field::Weight, weight)?;
    validate_measurement(Field::Height, height)?;

    let reading = Reading::new(weight, height);
    let stdout = io::stdout();
    let mut output = stdout.lock();
    if json {
        render_json(&mut output, &reading)?;
    } else {
        render_text(&mut output, &reading)?;
    }
    output.flush()?;
    Ok(reading)
}

/// Run the interactive session against the process streams.
///
/// Stdin is locked once and released when this scope unwinds, success or
/// not. Retry-on-invalid is only enabled when a human is typing; a piped
/// stream fails fast with a non-zero exit instead of looping to EOF.
fn run_interactive(json: bool) -> Result<Reading> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let options = SessionOptions {
        json,
        retry: stdin.is_terminal(),
    };

    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let reading = run(&mut input, &mut output, &options)?;
    output.flush()?;
    Ok(reading)
}
