//! Built-in badge definitions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::BadgeId;

const MANDATORY_COMPLETION: &str = "mandatory-completion";
const SELF_LEARNED_COMPLETION: &str = "self-learned-completion";
const PERFECT_QUIZ_SCORE: &str = "perfect-quiz-score";

/// Badge earned for completing every mandatory module.
pub fn mandatory_completion() -> BadgeId {
    BadgeId::new(MANDATORY_COMPLETION)
}

/// Badge earned for completing enough optional modules.
pub fn self_learned_completion() -> BadgeId {
    BadgeId::new(SELF_LEARNED_COMPLETION)
}

/// Badge earned for a flawless quiz submission.
pub fn perfect_quiz_score() -> BadgeId {
    BadgeId::new(PERFECT_QUIZ_SCORE)
}

/// Display metadata for a badge, for the boundary layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl BadgeDefinition {
    fn new(id: BadgeId, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

static BADGE_CATALOG: Lazy<Vec<BadgeDefinition>> = Lazy::new(|| {
    vec![
        BadgeDefinition::new(
            mandatory_completion(),
            "Core Curriculum Complete",
            "Completed every mandatory module",
            "badge-shield",
        ),
        BadgeDefinition::new(
            self_learned_completion(),
            "Self-Starter",
            "Completed three optional modules on your own initiative",
            "badge-compass",
        ),
        BadgeDefinition::new(
            perfect_quiz_score(),
            "Perfect Score",
            "Answered every question of a quiz correctly",
            "badge-star",
        ),
    ]
});

/// All built-in badges.
pub fn badge_catalog() -> &'static [BadgeDefinition] {
    &BADGE_CATALOG
}

/// Looks up a badge definition by id.
pub fn find_badge(id: &BadgeId) -> Option<&'static BadgeDefinition> {
    BADGE_CATALOG.iter().find(|b| &b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_three_distinct_badges() {
        let catalog = badge_catalog();
        assert_eq!(catalog.len(), 3);
        let mut ids: Vec<_> = catalog.iter().map(|b| b.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn find_badge_resolves_known_ids() {
        let badge = find_badge(&perfect_quiz_score()).unwrap();
        assert_eq!(badge.title, "Perfect Score");
        assert!(find_badge(&BadgeId::new("no-such-badge")).is_none());
    }

    #[test]
    fn badge_ids_match_wire_values() {
        assert_eq!(mandatory_completion().as_str(), "mandatory-completion");
        assert_eq!(self_learned_completion().as_str(), "self-learned-completion");
        assert_eq!(perfect_quiz_score().as_str(), "perfect-quiz-score");
    }
}
