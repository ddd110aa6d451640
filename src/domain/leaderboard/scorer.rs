//! Leaderboard scorer - pure point aggregation over a trainee's state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::domain::catalog::ModuleDefinition;
use crate::domain::foundation::{ModuleId, QuizId, UserId};
use crate::domain::progress::ProgressLedgerEntry;
use crate::domain::quiz::QuizAttempt;

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub trainee_id: UserId,
    pub display_name: String,
    pub avatar: Option<String>,
    pub points: u32,
}

/// Computes a trainee's total points.
///
/// Only MANDATORY and SELF_LEARNED modules contribute:
/// `points_per_completed_module` for a COMPLETED ledger entry, plus
/// `max_quiz_points` scaled by the completed attempt's exact score ratio
/// when the module carries a quiz.
pub fn score_trainee(
    modules: &[ModuleDefinition],
    progress_by_module: &HashMap<ModuleId, ProgressLedgerEntry>,
    attempts_by_quiz: &HashMap<QuizId, QuizAttempt>,
    scoring: &ScoringConfig,
) -> u32 {
    let mut total = 0u32;

    for module in modules {
        if !module.completion_mode().awards_points() {
            continue;
        }

        if let Some(progress) = progress_by_module.get(module.id()) {
            if progress.is_completed() {
                total += scoring.points_per_completed_module;
            }
        }

        if let Some(quiz_id) = module.quiz_id() {
            if let Some(attempt) = attempts_by_quiz.get(quiz_id) {
                if attempt.is_completed() {
                    total += attempt.points_scaled(scoring.max_quiz_points);
                }
            }
        }
    }

    total
}

/// Orders entries by points descending.
///
/// The sort is stable: trainees with equal points keep the order in which
/// they were supplied (the trainee listing's iteration order).
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}
