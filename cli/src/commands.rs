//! Command execution
//!
//! Commands resolve the body profile, compute summaries through the shared
//! library and hand them to [`crate::output`].

use crate::args::{Cli, Command};
use crate::config::{AppConfig, ProfileConfig};
use crate::error::{CliError, CliResult};
use crate::output::{write_summaries, OutputFormat, Summary};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use step_tracker_shared::{day_summary, training_summary, Locale, StatsResult};
use tracing::{debug, info, warn};
use validator::Validate;

/// Effective settings after config and flags are merged
#[derive(Debug, Clone)]
pub struct Settings {
    pub profile: ProfileConfig,
    pub format: OutputFormat,
    pub locale: Locale,
}

impl Settings {
    /// Apply command-line overrides on top of loaded configuration
    pub fn resolve(cli: &Cli, config: AppConfig) -> CliResult<Self> {
        let mut profile = config.profile;
        if let Some(weight) = cli.weight {
            profile.weight_kg = cli.weight_unit.to_kg(weight);
        }
        if let Some(height) = cli.height {
            profile.height_m = cli.height_unit.to_meters(height);
        }
        profile.validate()?;

        Ok(Self {
            profile,
            format: cli.format.unwrap_or(config.output.format),
            locale: cli.locale.unwrap_or(config.output.locale),
        })
    }
}

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub total: usize,
    pub failed: usize,
}

/// Compute a summary for a record of either shape
///
/// Two fields mean a day-steps record; anything else is read as training.
pub fn summarize(record: &str, profile: &ProfileConfig) -> StatsResult<Summary> {
    if record.split(',').count() == 2 {
        day_summary(record, profile.weight_kg, profile.height_m).map(Summary::Day)
    } else {
        training_summary(record, profile.weight_kg, profile.height_m).map(Summary::Training)
    }
}

/// Summarize each non-empty, non-comment line
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    settings: &Settings,
    out: &mut W,
) -> CliResult<BatchReport> {
    let mut report = BatchReport::default();
    let mut summaries = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                report.total += 1;
                report.failed += 1;
                warn!(line = index + 1, error = %e, "Skipping record that is not valid UTF-8");
                continue;
            }
        };
        let record = line.trim_matches(|c: char| c.is_ascii_whitespace());
        if record.is_empty() || record.starts_with('#') {
            continue;
        }

        report.total += 1;
        match summarize(record, &settings.profile) {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                report.failed += 1;
                warn!(line = index + 1, record, error = %e, "Skipping record");
            }
        }
    }

    write_summaries(out, &summaries, settings.format, settings.locale)?;
    info!(total = report.total, failed = report.failed, "Batch complete");
    Ok(report)
}

fn open_input(path: &Path) -> CliResult<Box<dyn BufRead>> {
    if path == Path::new("-") {
        debug!("Reading records from stdin");
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    debug!(path = %path.display(), "Reading records from file");
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Run the selected subcommand, writing results to `out`
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> CliResult<()> {
    let profile = &settings.profile;
    let summary = match &cli.command {
        Command::Day { record } => {
            Summary::Day(day_summary(record, profile.weight_kg, profile.height_m)?)
        }
        Command::Training { record } => {
            Summary::Training(training_summary(record, profile.weight_kg, profile.height_m)?)
        }
        Command::Batch { input } => {
            let report = run_batch(open_input(input)?, settings, out)?;
            if report.failed > 0 {
                return Err(CliError::BatchFailures {
                    failed: report.failed,
                    total: report.total,
                });
            }
            return Ok(());
        }
    };

    write_summaries(out, &[summary], settings.format, settings.locale)
}
