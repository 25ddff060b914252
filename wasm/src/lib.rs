//! Step Tracker WASM Module
//!
//! This crate provides WebAssembly bindings for the step statistics
//! so summaries can be computed in the browser.

use step_tracker_shared as shared;
use step_tracker_shared::{Locale, StatsError, StatsResult};
use wasm_bindgen::prelude::*;

fn to_js_error(err: StatsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_locale(locale: Option<String>) -> Locale {
    locale
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

fn day_text(data: &str, weight_kg: f64, height_m: f64, locale: Option<String>) -> StatsResult<String> {
    shared::day_action_info_localized(data, weight_kg, height_m, parse_locale(locale))
}

fn training_text(
    data: &str,
    weight_kg: f64,
    height_m: f64,
    locale: Option<String>,
) -> StatsResult<String> {
    shared::training_info_localized(data, weight_kg, height_m, parse_locale(locale))
}

/// Distance in km covered by `steps` for a person `height_m` tall
#[wasm_bindgen]
pub fn distance_km(steps: u32, height_m: f64) -> f64 {
    shared::distance(u64::from(steps), height_m)
}

/// Mean speed in km/h over `duration_minutes`; zero for a non-positive duration
#[wasm_bindgen]
pub fn mean_speed_kmh(steps: u32, height_m: f64, duration_minutes: f64) -> f64 {
    if duration_minutes <= 0.0 || !duration_minutes.is_finite() {
        return 0.0;
    }
    shared::distance(u64::from(steps), height_m) / (duration_minutes / 60.0)
}

/// Summary text for a `<steps>,<duration>` record
#[wasm_bindgen]
pub fn day_action_info(
    data: &str,
    weight_kg: f64,
    height_m: f64,
    locale: Option<String>,
) -> Result<String, JsValue> {
    day_text(data, weight_kg, height_m, locale).map_err(to_js_error)
}

/// Summary text for a `<steps>,<activity>,<duration>` record
#[wasm_bindgen]
pub fn training_info(
    data: &str,
    weight_kg: f64,
    height_m: f64,
    locale: Option<String>,
) -> Result<String, JsValue> {
    training_text(data, weight_kg, height_m, locale).map_err(to_js_error)
}

/// Training statistics as a JSON string
#[wasm_bindgen]
pub fn training_summary_json(data: &str, weight_kg: f64, height_m: f64) -> Result<String, JsValue> {
    let summary = shared::training_summary(data, weight_kg, height_m).map_err(to_js_error)?;
    serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_km() {
        assert!((distance_km(10_000, 1.8) - 8.1).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_kmh() {
        assert!((mean_speed_kmh(10_000, 1.8, 90.0) - 5.4).abs() < 1e-9);
        assert_eq!(mean_speed_kmh(10_000, 1.8, 0.0), 0.0);
        assert_eq!(mean_speed_kmh(10_000, 1.8, -10.0), 0.0);
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale(Some("ru".to_string())), Locale::Ru);
        assert_eq!(parse_locale(Some("xx".to_string())), Locale::En);
        assert_eq!(parse_locale(None), Locale::En);
    }

    #[test]
    fn test_day_action_info() {
        let text = day_action_info("10000,1h30m", 80.0, 1.8, None).unwrap();
        assert!(text.starts_with("Steps: 10000.\n"));
    }

    #[test]
    fn test_day_text_russian() {
        let text = day_text("10000,1h30m", 80.0, 1.8, Some("ru".to_string())).unwrap();
        assert_eq!(
            text,
            "Количество шагов: 10000.\nДистанция составила 8.10 км.\nВы сожгли 324.00 ккал."
        );
    }

    #[test]
    fn test_training_info_russian() {
        let text = training_info("10000,Бег,1h30m", 80.0, 1.8, Some("ru".to_string())).unwrap();
        assert!(text.starts_with("Тип тренировки: Бег\nДлительность: 1.50 ч.\n"));
    }

    #[test]
    fn test_malformed_records_fail() {
        let err = day_text("10000", 80.0, 1.8, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid record format: expected 2 comma-separated fields, got 1");

        let err = training_text("10000,Swimming,1h", 80.0, 1.8, None).unwrap_err();
        assert_eq!(err.to_string(), "Unknown activity type: \"Swimming\"");
    }

    #[test]
    fn test_training_summary_json() {
        let json = training_summary_json("10000,Running,1h30m", 80.0, 1.8).unwrap();
        assert!(json.contains("\"activity\":\"running\""));
    }
}
