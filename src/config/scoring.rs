//! Scoring and badge-threshold configuration.
//!
//! These were implicit constants in earlier revisions of the system;
//! they are hoisted here so deployments can tune them.

use serde::Deserialize;

use super::error::ValidationError;

/// Point values and badge thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Points for each completed mandatory or self-learned module.
    #[serde(default = "default_points_per_completed_module")]
    pub points_per_completed_module: u32,

    /// Maximum points a single quiz can contribute, scaled by score.
    #[serde(default = "default_max_quiz_points")]
    pub max_quiz_points: u32,

    /// Optional-module completions required for the self-learned badge.
    #[serde(default = "default_self_learned_threshold")]
    pub self_learned_threshold: u32,
}

fn default_points_per_completed_module() -> u32 {
    50
}

fn default_max_quiz_points() -> u32 {
    50
}

fn default_self_learned_threshold() -> u32 {
    3
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_completed_module: default_points_per_completed_module(),
            max_quiz_points: default_max_quiz_points(),
            self_learned_threshold: default_self_learned_threshold(),
        }
    }
}

impl ScoringConfig {
    /// Validates semantic constraints on scoring values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.points_per_completed_module == 0 || self.max_quiz_points == 0 {
            return Err(ValidationError::ZeroScoringValue);
        }
        if self.self_learned_threshold == 0 {
            return Err(ValidationError::ThresholdTooLow);
        }
        Ok(())
    }
}
