//! Achievements - badges, the trainee's earned set, and award rules.

mod achievements;
mod badge;
mod rules;

pub use achievements::TraineeAchievements;
pub use badge::{badge_catalog, find_badge, BadgeDefinition};
pub use badge::{mandatory_completion, perfect_quiz_score, self_learned_completion};
pub use rules::{mandatory_completion_satisfied, self_learned_completion_satisfied};
