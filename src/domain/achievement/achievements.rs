//! TraineeAchievements - the set of badges a trainee holds.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::achievement::{find_badge, BadgeDefinition};
use crate::domain::foundation::BadgeId;

/// A trainee's earned badges and counter.
///
/// `award` is the only mutation path, so `badges_earned_count` always
/// equals the size of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraineeAchievements {
    earned: BTreeSet<BadgeId>,
    badges_earned_count: u32,
}

impl TraineeAchievements {
    /// Empty achievement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores an achievement set from stored badge ids.
    pub fn from_earned(earned: BTreeSet<BadgeId>) -> Self {
        let badges_earned_count = earned.len() as u32;
        Self {
            earned,
            badges_earned_count,
        }
    }

    /// Awards a badge. Returns true if it was newly earned; re-awarding a
    /// held badge is a no-op and the counter does not move.
    pub fn award(&mut self, badge: BadgeId) -> bool {
        let newly_earned = self.earned.insert(badge);
        if newly_earned {
            self.badges_earned_count += 1;
        }
        newly_earned
    }

    /// Returns true if the trainee holds the badge.
    pub fn holds(&self, badge: &BadgeId) -> bool {
        self.earned.contains(badge)
    }

    pub fn earned(&self) -> &BTreeSet<BadgeId> {
        &self.earned
    }

    pub fn count(&self) -> u32 {
        self.badges_earned_count
    }

    /// Resolves earned badge ids against the built-in catalog for display.
    ///
    /// Ids without catalog metadata are skipped.
    pub fn resolve(&self) -> Vec<&'static BadgeDefinition> {
        self.earned.iter().filter_map(find_badge).collect()
    }
}
