//! Trainee records as seen by the engine.
//!
//! The engine reads trainees through the `TraineeStore` port and only ever
//! writes back their achievements.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::achievement::TraineeAchievements;
use crate::domain::foundation::UserId;

/// Role of a user in the training system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Trainee,
    Trainer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Trainee => "Trainee",
            Role::Trainer => "Trainer",
        };
        write!(f, "{}", s)
    }
}

/// A user of the training system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainee {
    pub id: UserId,
    pub display_name: String,
    pub avatar: Option<String>,
    pub role: Role,
    pub achievements: TraineeAchievements,
}

impl Trainee {
    pub fn new(id: UserId, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            avatar: None,
            role,
            achievements: TraineeAchievements::new(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trainee_starts_with_no_achievements() {
        let trainee = Trainee::new(UserId::new("t-1").unwrap(), "Alex Kim", Role::Trainee);
        assert_eq!(trainee.achievements.count(), 0);
        assert!(trainee.avatar.is_none());
    }

    #[test]
    fn with_avatar_sets_avatar() {
        let trainee = Trainee::new(UserId::new("t-1").unwrap(), "Alex Kim", Role::Trainee)
            .with_avatar("avatars/alex.png");
        assert_eq!(trainee.avatar.as_deref(), Some("avatars/alex.png"));
    }

    #[test]
    fn role_serializes_to_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Trainee).unwrap(), "\"TRAINEE\"");
        assert_eq!(serde_json::to_string(&Role::Trainer).unwrap(), "\"TRAINER\"");
    }
}
