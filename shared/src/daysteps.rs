//! Daily step summaries
//!
//! A day-steps record (`<steps>,<duration>`) is treated as walking: the
//! summary reports the step count, distance and walking calories.

use crate::calculations::{distance, walking_spent_calories};
use crate::errors::StatsResult;
use crate::record::parse_day_steps;
use crate::report::{render_day, Locale};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Statistics for one day-steps record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

/// Compute statistics for a `<steps>,<duration>` record
pub fn day_summary(data: &str, weight_kg: f64, height_m: f64) -> StatsResult<DaySummary> {
    let record = parse_day_steps(data).map_err(|e| {
        warn!(record = data, error = %e, "Rejected day-steps record");
        e
    })?;

    let distance_km = distance(record.steps, height_m);
    let calories_kcal =
        walking_spent_calories(record.steps, weight_kg, height_m, &record.duration)?;

    debug!(
        steps = record.steps,
        distance_km, calories_kcal, "Computed day-steps summary"
    );

    Ok(DaySummary {
        steps: record.steps,
        distance_km,
        calories_kcal,
    })
}

/// Summary text for a `<steps>,<duration>` record in the given locale
pub fn day_action_info_localized(
    data: &str,
    weight_kg: f64,
    height_m: f64,
    locale: Locale,
) -> StatsResult<String> {
    let summary = day_summary(data, weight_kg, height_m)?;
    Ok(render_day(&summary, locale))
}

/// Summary text for a `<steps>,<duration>` record
pub fn day_action_info(data: &str, weight_kg: f64, height_m: f64) -> StatsResult<String> {
    day_action_info_localized(data, weight_kg, height_m, Locale::En)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RecordError, StatsError};

    #[test]
    fn test_day_summary() {
        let summary = day_summary("10000,1h30m", 80.0, 1.8).unwrap();
        assert_eq!(summary.steps, 10_000);
        assert!((summary.distance_km - 8.1).abs() < 1e-9);
        assert!((summary.calories_kcal - 324.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_action_info() {
        let text = day_action_info("10000,1h30m", 80.0, 1.8).unwrap();
        assert_eq!(
            text,
            "Steps: 10000.\nDistance: 8.10 km.\nCalories burned: 324.00 kcal."
        );
    }

    #[test]
    fn test_day_action_info_ru() {
        let text = day_action_info_localized("10000,1h30m", 80.0, 1.75, Locale::Ru).unwrap();
        assert!(text.starts_with("Количество шагов: 10000.\n"));
    }

    #[test]
    fn test_malformed_record() {
        let err = day_action_info("10000", 80.0, 1.75).unwrap_err();
        assert_eq!(
            err,
            StatsError::Record(RecordError::InvalidFormat {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_invalid_body_measurements() {
        let err = day_summary("10000,1h", 0.0, 1.75).unwrap_err();
        assert_eq!(err.field(), Some("weight"));
        let err = day_summary("10000,1h", 80.0, -1.0).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = day_summary("10000,0s", 80.0, 1.75).unwrap_err();
        assert_eq!(err.field(), Some("duration"));
    }
}
