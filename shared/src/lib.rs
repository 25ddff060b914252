//! Step Tracker Shared Library
//!
//! Parses step-count records, validates them and computes distance,
//! speed and calories burned. Used by the CLI and the WASM module.

pub mod activity;
pub mod calculations;
pub mod daysteps;
pub mod duration;
pub mod errors;
pub mod record;
pub mod report;
pub mod training;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use activity::ActivityKind;
pub use calculations::*;
pub use daysteps::{day_action_info, day_action_info_localized, day_summary, DaySummary};
pub use errors::*;
pub use record::{parse_day_steps, parse_training, DayStepsRecord, TrainingRecord};
pub use report::Locale;
pub use training::{training_info, training_info_localized, training_summary, TrainingSummary};
pub use units::*;
