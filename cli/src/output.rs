//! Result rendering for text, JSON and CSV output

use crate::error::CliResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use step_tracker_shared::report::{render_day, render_training};
use step_tracker_shared::{DaySummary, Locale, TrainingSummary};

/// Output format for computed summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// One JSON object per record
    Json,
    /// CSV with a header row
    Csv,
}

/// A computed summary of either record shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Summary {
    Day(DaySummary),
    Training(TrainingSummary),
}

impl Summary {
    pub fn render(&self, locale: Locale) -> String {
        match self {
            Summary::Day(day) => render_day(day, locale),
            Summary::Training(training) => render_training(training, locale),
        }
    }
}

/// Flat row shared by both summary shapes
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    kind: &'static str,
    steps: Option<u64>,
    activity: Option<&'a str>,
    duration_hours: Option<f64>,
    distance_km: f64,
    speed_kmh: Option<f64>,
    calories_kcal: f64,
}

impl<'a> From<&'a Summary> for CsvRow<'a> {
    fn from(summary: &'a Summary) -> Self {
        match summary {
            Summary::Day(day) => CsvRow {
                kind: "day",
                steps: Some(day.steps),
                activity: None,
                duration_hours: None,
                distance_km: day.distance_km,
                speed_kmh: None,
                calories_kcal: day.calories_kcal,
            },
            Summary::Training(training) => CsvRow {
                kind: "training",
                steps: Some(training.steps),
                activity: Some(&training.label),
                duration_hours: Some(training.duration_hours),
                distance_km: training.distance_km,
                speed_kmh: Some(training.speed_kmh),
                calories_kcal: training.calories_kcal,
            },
        }
    }
}

/// Write summaries in the requested format
pub fn write_summaries<W: Write>(
    out: &mut W,
    summaries: &[Summary],
    format: OutputFormat,
    locale: Locale,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for (i, summary) in summaries.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", summary.render(locale))?;
            }
        }
        OutputFormat::Json => {
            for summary in summaries {
                serde_json::to_writer(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for summary in summaries {
                writer.serialize(CsvRow::from(summary))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
