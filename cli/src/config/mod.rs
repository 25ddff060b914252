//! Configuration management for the Step Tracker CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (`--config <path>`, else config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: STEPS__)
//!
//! Command-line flags are applied on top by the caller.

use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use step_tracker_shared::Locale;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Body measurements used by every calculation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileConfig {
    /// Body weight in kilograms
    #[validate(range(exclusive_min = 0.0, message = "weight must be positive"))]
    pub weight_kg: f64,
    /// Body height in meters
    #[validate(range(exclusive_min = 0.0, message = "height must be positive"))]
    pub height_m: f64,
}

/// How results are written
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig {
                weight_kg: 75.0,
                height_m: 1.75,
            },
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. The explicit config file, or one based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with STEPS__ prefix
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            // An explicitly named file must exist
            Some(path) => config::File::from(path).required(true),
            None => {
                let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
                config::File::with_name(&format!("config/{}.toml", env)).required(false)
            }
        };

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(file)
            // Override with environment variables (STEPS__ prefix)
            // e.g., STEPS__PROFILE__WEIGHT_KG=72 sets profile.weight_kg
            .add_source(
                config::Environment::with_prefix("STEPS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
