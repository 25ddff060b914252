//! Human-readable summaries
//!
//! Summaries render one item per line with values rounded to two
//! decimals, in English or Russian.

use crate::daysteps::DaySummary;
use crate::training::TrainingSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of rendered summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

/// Render a day-steps summary
pub fn render_day(summary: &DaySummary, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.",
            summary.steps, summary.distance_km, summary.calories_kcal
        ),
        Locale::Ru => format!(
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
            summary.steps, summary.distance_km, summary.calories_kcal
        ),
    }
}

/// Render a training summary
pub fn render_training(summary: &TrainingSummary, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Activity: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h.\nCalories burned: {:.2}",
            summary.label,
            summary.duration_hours,
            summary.distance_km,
            summary.speed_kmh,
            summary.calories_kcal
        ),
        Locale::Ru => format!(
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч.\nСожгли калорий: {:.2}",
            summary.label,
            summary.duration_hours,
            summary.distance_km,
            summary.speed_kmh,
            summary.calories_kcal
        ),
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_day(self, Locale::En))
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_training(self, Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityKind;

    fn day() -> DaySummary {
        DaySummary {
            steps: 678,
            distance_km: 0.5339,
            calories_kcal: 12.346,
        }
    }

    fn training() -> TrainingSummary {
        TrainingSummary {
            activity: ActivityKind::Running,
            label: "Бег".to_string(),
            steps: 10_000,
            duration_hours: 1.5,
            distance_km: 7.8751,
            speed_kmh: 5.25,
            calories_kcal: 630.0,
        }
    }

    #[test]
    fn test_render_day_en() {
        assert_eq!(
            render_day(&day(), Locale::En),
            "Steps: 678.\nDistance: 0.53 km.\nCalories burned: 12.35 kcal."
        );
    }

    #[test]
    fn test_render_day_ru() {
        assert_eq!(
            render_day(&day(), Locale::Ru),
            "Количество шагов: 678.\nДистанция составила 0.53 км.\nВы сожгли 12.35 ккал."
        );
    }

    #[test]
    fn test_render_training_en() {
        assert_eq!(
            training().to_string(),
            "Activity: Бег\nDuration: 1.50 h.\nDistance: 7.88 km.\nSpeed: 5.25 km/h.\nCalories burned: 630.00"
        );
    }

    #[test]
    fn test_render_training_ru() {
        let text = render_training(&training(), Locale::Ru);
        assert!(text.starts_with("Тип тренировки: Бег\n"));
        assert!(text.ends_with("Сожгли калорий: 630.00"));
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }
}
