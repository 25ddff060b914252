//! Error types for the Step Tracker libraries

use thiserror::Error;

/// Errors raised while parsing an activity record string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Invalid record format: expected {expected} comma-separated fields, got {found}")]
    InvalidFormat { expected: usize, found: usize },

    #[error("Invalid step count: {0:?}")]
    InvalidSteps(String),

    #[error("Step count must be positive, got {0}")]
    NonPositiveSteps(i64),

    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),

    #[error("Unknown activity type: {0:?}")]
    UnknownActivity(String),
}

/// Errors raised while validating inputs or computing statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl StatsError {
    /// Shorthand for an out-of-range input value
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        StatsError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending input field, if the error concerns one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            StatsError::InvalidInput { field, .. } => Some(field),
            StatsError::Record(RecordError::InvalidSteps(_))
            | StatsError::Record(RecordError::NonPositiveSteps(_)) => Some("steps"),
            StatsError::Record(RecordError::InvalidDuration(_)) => Some("duration"),
            StatsError::Record(RecordError::UnknownActivity(_)) => Some("activity"),
            StatsError::Record(RecordError::InvalidFormat { .. }) => None,
        }
    }
}

/// Result alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
