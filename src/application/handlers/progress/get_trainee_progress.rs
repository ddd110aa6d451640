//! GetTraineeProgressHandler - summarizes a trainee's progress.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Percentage, Timestamp, UserId};
use crate::ports::{ProgressStore, QuizAttemptStore};

/// Aggregated progress view for one trainee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraineeProgressSummary {
    pub completed_modules: u32,
    pub in_progress_modules: u32,
    pub not_started_modules: u32,
    /// Latest `last_accessed_at` across the trainee's ledger entries;
    /// `None` when the trainee has never touched a module.
    pub last_activity: Option<Timestamp>,
    /// Integer mean over completed quiz attempt scores, zero when none.
    pub average_score: Percentage,
}

/// Query handler for the trainee progress summary.
pub struct GetTraineeProgressHandler {
    progress_store: Arc<dyn ProgressStore>,
    attempt_store: Arc<dyn QuizAttemptStore>,
}

impl GetTraineeProgressHandler {
    pub fn new(
        progress_store: Arc<dyn ProgressStore>,
        attempt_store: Arc<dyn QuizAttemptStore>,
    ) -> Self {
        Self {
            progress_store,
            attempt_store,
        }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<TraineeProgressSummary, DomainError> {
        let entries = self.progress_store.list_for_user(user_id).await?;

        let mut completed = 0u32;
        let mut in_progress = 0u32;
        let mut not_started = 0u32;
        let mut last_activity: Option<Timestamp> = None;

        for entry in &entries {
            match entry.status() {
                s if s.is_completed() => completed += 1,
                s if s.is_started() => in_progress += 1,
                _ => not_started += 1,
            }
            last_activity = Some(match last_activity {
                Some(seen) => seen.max(entry.last_accessed_at()),
                None => entry.last_accessed_at(),
            });
        }

        let attempts = self.attempt_store.list_for_user(user_id).await?;
        let completed_attempts: Vec<_> =
            attempts.iter().filter(|a| a.is_completed()).collect();
        let average_score = if completed_attempts.is_empty() {
            Percentage::ZERO
        } else {
            let total: u32 = completed_attempts
                .iter()
                .map(|a| a.score().value() as u32)
                .sum();
            Percentage::new((total / completed_attempts.len() as u32) as u8)
        };

        Ok(TraineeProgressSummary {
            completed_modules: completed,
            in_progress_modules: in_progress,
            not_started_modules: not_started,
            last_activity,
            average_score,
        })
    }
}
