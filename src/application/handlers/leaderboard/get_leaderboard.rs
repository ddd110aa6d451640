//! GetLeaderboardHandler - ranks the full trainee population by points.
//!
//! Recomputed from ledger and attempt state on every call; nothing is
//! cached. Ties keep the trainee store's listing order (the sort is
//! stable).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::domain::foundation::DomainError;
use crate::domain::leaderboard::{rank, score_trainee, LeaderboardEntry};
use crate::domain::trainee::Role;
use crate::ports::{ModuleCatalog, ProgressStore, QuizAttemptStore, TraineeStore};

/// Query handler for the competitive leaderboard.
pub struct GetLeaderboardHandler {
    catalog: Arc<dyn ModuleCatalog>,
    progress_store: Arc<dyn ProgressStore>,
    attempt_store: Arc<dyn QuizAttemptStore>,
    trainee_store: Arc<dyn TraineeStore>,
    scoring: ScoringConfig,
}

impl GetLeaderboardHandler {
    pub fn new(
        catalog: Arc<dyn ModuleCatalog>,
        progress_store: Arc<dyn ProgressStore>,
        attempt_store: Arc<dyn QuizAttemptStore>,
        trainee_store: Arc<dyn TraineeStore>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            catalog,
            progress_store,
            attempt_store,
            trainee_store,
            scoring,
        }
    }

    pub async fn handle(&self) -> Result<Vec<LeaderboardEntry>, DomainError> {
        let modules = self.catalog.list_all_modules().await?;
        let trainees = self.trainee_store.list_trainees(Role::Trainee).await?;

        let mut entries = Vec::with_capacity(trainees.len());
        for trainee in trainees {
            let progress_by_module: HashMap<_, _> = self
                .progress_store
                .list_for_user(&trainee.id)
                .await?
                .into_iter()
                .map(|entry| (entry.module_id().clone(), entry))
                .collect();

            let attempts_by_quiz: HashMap<_, _> = self
                .attempt_store
                .list_for_user(&trainee.id)
                .await?
                .into_iter()
                .map(|attempt| (attempt.quiz_id().clone(), attempt))
                .collect();

            let points = score_trainee(
                &modules,
                &progress_by_module,
                &attempts_by_quiz,
                &self.scoring,
            );

            entries.push(LeaderboardEntry {
                trainee_id: trainee.id,
                display_name: trainee.display_name,
                avatar: trainee.avatar,
                points,
            });
        }

        debug!(trainees = entries.len(), "leaderboard computed");
        Ok(rank(entries))
    }
}
