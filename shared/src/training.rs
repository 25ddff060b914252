//! Training session summaries

use crate::activity::ActivityKind;
use crate::calculations::{distance, mean_speed, spent_calories};
use crate::duration::hours;
use crate::errors::StatsResult;
use crate::record::parse_training;
use crate::report::{render_training, Locale};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Statistics for one training record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    /// Activity label as written in the record
    pub label: String,
    pub steps: u64,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Compute statistics for a `<steps>,<activity>,<duration>` record
pub fn training_summary(data: &str, weight_kg: f64, height_m: f64) -> StatsResult<TrainingSummary> {
    let parsed = parse_training(data).and_then(|record| {
        let kind = record.kind()?;
        Ok((record, kind))
    });
    let (record, activity) = parsed.map_err(|e| {
        warn!(record = data, error = %e, "Rejected training record");
        e
    })?;

    let calories_kcal = spent_calories(activity, record.steps, weight_kg, height_m, &record.duration)?;
    let summary = TrainingSummary {
        activity,
        label: record.activity.clone(),
        steps: record.steps,
        duration_hours: hours(&record.duration),
        distance_km: distance(record.steps, height_m),
        speed_kmh: mean_speed(record.steps, height_m, &record.duration),
        calories_kcal,
    };

    debug!(
        activity = %summary.activity,
        distance_km = summary.distance_km,
        speed_kmh = summary.speed_kmh,
        calories_kcal = summary.calories_kcal,
        "Computed training summary"
    );

    Ok(summary)
}

/// Summary text for a training record in the given locale
pub fn training_info_localized(
    data: &str,
    weight_kg: f64,
    height_m: f64,
    locale: Locale,
) -> StatsResult<String> {
    let summary = training_summary(data, weight_kg, height_m)?;
    Ok(render_training(&summary, locale))
}

/// Summary text for a `<steps>,<activity>,<duration>` record
pub fn training_info(data: &str, weight_kg: f64, height_m: f64) -> StatsResult<String> {
    training_info_localized(data, weight_kg, height_m, Locale::En)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RecordError, StatsError};

    #[test]
    fn test_running_summary() {
        let summary = training_summary("10000,Running,1h30m", 80.0, 1.8).unwrap();
        assert_eq!(summary.activity, ActivityKind::Running);
        assert_eq!(summary.label, "Running");
        assert_eq!(summary.steps, 10_000);
        assert!((summary.duration_hours - 1.5).abs() < 1e-12);
        assert!((summary.distance_km - 8.1).abs() < 1e-9);
        assert!((summary.speed_kmh - 5.4).abs() < 1e-9);
        assert!((summary.calories_kcal - 648.0).abs() < 1e-9);
    }

    #[test]
    fn test_walking_info() {
        let text = training_info("10000,Walking,1h30m", 80.0, 1.8).unwrap();
        assert_eq!(
            text,
            "Activity: Walking\nDuration: 1.50 h.\nDistance: 8.10 km.\nSpeed: 5.40 km/h.\nCalories burned: 324.00"
        );
    }

    #[test]
    fn test_russian_labels_accepted() {
        let text = training_info_localized("10000,Бег,1h30m", 80.0, 1.8, Locale::Ru).unwrap();
        assert!(text.starts_with("Тип тренировки: Бег\nДлительность: 1.50 ч.\n"));
    }

    #[test]
    fn test_label_printed_as_written() {
        let text = training_info("100,walk,1h", 80.0, 1.8).unwrap();
        assert!(text.starts_with("Activity: walk\n"));

        let text = training_info_localized("100,Running,1h", 80.0, 1.8, Locale::Ru).unwrap();
        assert!(text.starts_with("Тип тренировки: Running\n"));
    }

    #[test]
    fn test_unknown_activity() {
        let err = training_info("10000,Swimming,1h", 80.0, 1.8).unwrap_err();
        assert_eq!(
            err,
            StatsError::Record(RecordError::UnknownActivity("Swimming".to_string()))
        );
    }

    #[test]
    fn test_missing_activity_field() {
        let err = training_info("10000,1h", 80.0, 1.8).unwrap_err();
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = training_summary("10000,Running,-1h", 80.0, 1.8).unwrap_err();
        assert_eq!(err.field(), Some("duration"));
    }

    #[test]
    fn test_summary_serializes() {
        let summary = training_summary("10000,Running,1h30m", 80.0, 1.8).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["activity"], "running");
        assert_eq!(json["label"], "Running");
        assert_eq!(json["steps"], 10_000);
        assert!(json["calories_kcal"].as_f64().unwrap() > 0.0);
    }
}
