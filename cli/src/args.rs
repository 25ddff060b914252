//! Command-line arguments

use crate::output::OutputFormat;
use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;
use step_tracker_shared::{HeightUnit, Locale, WeightUnit};

#[derive(Parser, Debug)]
#[command(author, version, about = "Step count, distance and calorie statistics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Body weight (overrides the configured profile)
    #[arg(long, global = true)]
    pub weight: Option<f64>,

    /// Body height (overrides the configured profile)
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// Unit of --weight (kg, lbs)
    #[arg(long, global = true, default_value = "kg")]
    pub weight_unit: WeightUnit,

    /// Unit of --height (m, cm, in)
    #[arg(long, global = true, default_value = "m")]
    pub height_unit: HeightUnit,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Summary language (en, ru)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a `<steps>,<duration>` record
    Day {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
    /// Summarize a `<steps>,<activity>,<duration>` record
    Training {
        #[arg(allow_hyphen_values = true)]
        record: String,
    },
    /// Summarize one record per line of a file (`-` for stdin)
    Batch {
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },
}
