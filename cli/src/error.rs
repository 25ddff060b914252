//! CLI error handling
//!
//! Maps failures to process exit codes.

use step_tracker_shared::StatsError;
use thiserror::Error;

/// Error raised while running a command
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid profile: {0}")]
    Profile(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("{failed} of {total} records failed")]
    BatchFailures { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Stats(_) | CliError::BatchFailures { .. } => 1,
            CliError::Profile(_) => 2,
            CliError::Io(_) | CliError::Json(_) | CliError::Csv(_) => 3,
        }
    }
}

/// Result type alias for CLI commands
pub type CliResult<T> = Result<T, CliError>;
