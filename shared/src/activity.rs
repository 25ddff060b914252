//! Activity kinds recognized in training records

use crate::errors::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calorie correction applied to walking sessions
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Calorie correction applied to running sessions
pub const RUNNING_CALORIES_COEFFICIENT: f64 = 1.0;

/// Kind of activity a training record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Multiplier applied on top of the base calorie formula
    pub fn calories_coefficient(&self) -> f64 {
        match self {
            ActivityKind::Walking => WALKING_CALORIES_COEFFICIENT,
            ActivityKind::Running => RUNNING_CALORIES_COEFFICIENT,
        }
    }

    /// Canonical English label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ActivityKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" | "walk" | "ходьба" => Ok(ActivityKind::Walking),
            "running" | "run" | "бег" => Ok(ActivityKind::Running),
            _ => Err(RecordError::UnknownActivity(s.to_string())),
        }
    }
}
