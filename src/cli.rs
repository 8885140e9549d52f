//! CLI argument parsing
//!
//! Defines the CLI interface using clap. Running with no arguments starts
//! the interactive session; `--weight`/`--height` switch to one-shot
//! evaluation for scripts.

use clap::Parser;

/// Quetelet - BMI calculator and classifier
#[derive(Parser, Debug)]
#[command(name = "quetelet")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'quetelet' without arguments for an interactive session.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Weight in kilograms (skips the weight prompt)
    #[arg(long, value_name = "KG", requires = "height")]
    pub weight: Option<f64>,

    /// Height in meters (skips the height prompt)
    #[arg(long, value_name = "M", requires = "weight")]
    pub height: Option<f64>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
