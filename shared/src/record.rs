//! Activity record parsing
//!
//! Two comma-separated record shapes are understood:
//!
//! - day steps: `<steps>,<duration>`, e.g. `678,0h50m`
//! - training: `<steps>,<activity>,<duration>`, e.g. `3456,Walking,3h00m`
//!
//! Fields are trimmed of ASCII whitespace before parsing. The step count
//! must be a positive integer; the duration follows
//! [`crate::duration::parse_duration`].

use crate::activity::ActivityKind;
use crate::duration::parse_duration;
use crate::errors::RecordError;
use chrono::Duration;
use std::str::FromStr;

/// A day-steps record: steps walked over a period
#[derive(Debug, Clone, PartialEq)]
pub struct DayStepsRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// A training record: steps taken during a labelled activity
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: u64,
    /// Activity label as written in the record
    pub activity: String,
    pub duration: Duration,
}

impl TrainingRecord {
    /// Resolve the label into a known activity kind
    pub fn kind(&self) -> Result<ActivityKind, RecordError> {
        self.activity.parse()
    }
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = data
        .split(',')
        .map(|field| field.trim_matches(|c: char| c.is_ascii_whitespace()))
        .collect();
    if fields.len() != expected {
        return Err(RecordError::InvalidFormat {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<u64, RecordError> {
    let steps: i64 = field
        .parse()
        .map_err(|_| RecordError::InvalidSteps(field.to_string()))?;
    if steps <= 0 {
        return Err(RecordError::NonPositiveSteps(steps));
    }
    // Positive i64 always fits
    Ok(steps as u64)
}

/// Parse a `<steps>,<duration>` record
pub fn parse_day_steps(data: &str) -> Result<DayStepsRecord, RecordError> {
    let fields = split_fields(data, 2)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[1])?;
    Ok(DayStepsRecord { steps, duration })
}

/// Parse a `<steps>,<activity>,<duration>` record
pub fn parse_training(data: &str) -> Result<TrainingRecord, RecordError> {
    let fields = split_fields(data, 3)?;
    let steps = parse_steps(fields[0])?;
    let activity = fields[1].to_string();
    let duration = parse_duration(fields[2])?;
    Ok(TrainingRecord {
        steps,
        activity,
        duration,
    })
}

impl FromStr for DayStepsRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_day_steps(s)
    }
}

impl FromStr for TrainingRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_training(s)
    }
}
