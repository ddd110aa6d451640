//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRAILHEAD` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use trailhead::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Module completion awards {} points", config.scoring.points_per_completed_module);
//! ```

mod error;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Point values and badge thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads
    /// environment variables with the `TRAILHEAD` prefix:
    ///
    /// - `TRAILHEAD__SCORING__MAX_QUIZ_POINTS=25` -> `scoring.max_quiz_points = 25`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRAILHEAD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        Ok(())
    }
}
