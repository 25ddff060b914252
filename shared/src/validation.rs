//! Input validation functions
//!
//! Every statistic needs a positive step count, body weight, height and
//! duration. The checks here name the offending field in the error.

use crate::errors::{StatsError, StatsResult};
use chrono::Duration;

fn validate_positive(field: &'static str, value: f64) -> StatsResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(StatsError::invalid(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(StatsError::invalid(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Validate step count
pub fn validate_steps(steps: u64) -> StatsResult<()> {
    if steps == 0 {
        return Err(StatsError::invalid("steps", "must be positive, got 0"));
    }
    Ok(())
}

/// Validate body weight (in kg)
pub fn validate_weight(weight_kg: f64) -> StatsResult<()> {
    validate_positive("weight", weight_kg)
}

/// Validate height (in meters)
pub fn validate_height(height_m: f64) -> StatsResult<()> {
    validate_positive("height", height_m)
}

/// Validate activity duration
pub fn validate_duration(duration: &Duration) -> StatsResult<()> {
    if *duration <= Duration::zero() {
        return Err(StatsError::invalid(
            "duration",
            format!("must be positive, got {}", duration),
        ));
    }
    Ok(())
}

/// Validate every input a calorie calculation depends on
pub fn validate_inputs(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: &Duration,
) -> StatsResult<()> {
    validate_steps(steps)?;
    validate_weight(weight_kg)?;
    validate_height(height_m)?;
    validate_duration(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(1).is_ok());
        assert_eq!(validate_steps(0).unwrap_err().field(), Some("steps"));
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(75.0).is_ok());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height() {
        assert!(validate_height(1.75).is_ok());
        let err = validate_height(0.0).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_validate_duration() {
        assert!(validate_duration(&Duration::minutes(30)).is_ok());
        assert!(validate_duration(&Duration::zero()).is_err());
        assert!(validate_duration(&Duration::minutes(-30)).is_err());
    }

    #[test]
    fn test_validate_inputs_reports_first_failure() {
        let err = validate_inputs(100, -2.0, 0.0, &Duration::zero()).unwrap_err();
        assert_eq!(err.field(), Some("weight"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_inputs_valid(
            steps in 1u64..100_000,
            weight in 0.1f64..300.0,
            height in 0.1f64..2.5,
            minutes in 1i64..1440
        ) {
            prop_assert!(validate_inputs(steps, weight, height, &Duration::minutes(minutes)).is_ok());
        }

        #[test]
        fn prop_non_positive_weight_invalid(weight in -500.0f64..=0.0) {
            prop_assert!(validate_weight(weight).is_err());
        }
    }
}
