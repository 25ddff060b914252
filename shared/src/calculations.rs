//! Distance, speed and calorie formulas
//!
//! Step length is modelled as a fixed fraction of body height:
//!
//! - distance (km) = steps × (height(m) × 0.45) / 1000
//! - speed (km/h) = distance / duration(h), or 0 for a non-positive duration
//! - calories = weight(kg) × speed × duration(min) / 60 × activity coefficient
//!
//! All functions here are pure.

use crate::activity::ActivityKind;
use crate::duration::{hours, minutes};
use crate::errors::StatsResult;
use crate::validation::validate_inputs;
use chrono::Duration;

/// Fraction of body height covered by one step
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Length of a single step in meters
pub fn step_length(height_m: f64) -> f64 {
    height_m * STEP_LENGTH_COEFFICIENT
}

/// Distance covered in kilometers
pub fn distance(steps: u64, height_m: f64) -> f64 {
    steps as f64 * step_length(height_m) / M_IN_KM
}

/// Mean speed in km/h; zero when the duration is not positive
pub fn mean_speed(steps: u64, height_m: f64, duration: &Duration) -> f64 {
    if *duration <= Duration::zero() {
        return 0.0;
    }
    distance(steps, height_m) / hours(duration)
}

/// Calories for an activity, scaled by its coefficient
pub fn spent_calories(
    activity: ActivityKind,
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: &Duration,
) -> StatsResult<f64> {
    validate_inputs(steps, weight_kg, height_m, duration)?;

    let speed = mean_speed(steps, height_m, duration);
    let calories = weight_kg * speed * minutes(duration) / MIN_IN_H;
    Ok(calories * activity.calories_coefficient())
}

/// Calories burned while walking
pub fn walking_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: &Duration,
) -> StatsResult<f64> {
    spent_calories(ActivityKind::Walking, steps, weight_kg, height_m, duration)
}

/// Calories burned while running
pub fn running_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: &Duration,
) -> StatsResult<f64> {
    spent_calories(ActivityKind::Running, steps, weight_kg, height_m, duration)
}
