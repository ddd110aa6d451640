//! BadgeEvaluator - awards badges when completion conditions are met.
//!
//! Invoked by the write handlers after a module's status lands on
//! COMPLETED, and independently for perfect quiz scores. Every award is
//! idempotent: a badge the trainee already holds is never re-added and
//! the counter never moves twice.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ScoringConfig;
use crate::domain::achievement::{
    mandatory_completion, mandatory_completion_satisfied, perfect_quiz_score,
    self_learned_completion, self_learned_completion_satisfied,
};
use crate::domain::foundation::{BadgeId, CompletionMode, DomainError, ModuleId, UserId};
use crate::ports::{ModuleCatalog, ProgressStore, TraineeStore};

/// Rule engine deciding which badges newly qualify after an update.
pub struct BadgeEvaluator {
    catalog: Arc<dyn ModuleCatalog>,
    progress_store: Arc<dyn ProgressStore>,
    trainee_store: Arc<dyn TraineeStore>,
    scoring: ScoringConfig,
}

impl BadgeEvaluator {
    pub fn new(
        catalog: Arc<dyn ModuleCatalog>,
        progress_store: Arc<dyn ProgressStore>,
        trainee_store: Arc<dyn TraineeStore>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            catalog,
            progress_store,
            trainee_store,
            scoring,
        }
    }

    /// Re-checks the module-completion badge rules for a trainee whose
    /// entry for `module_id` is COMPLETED. Returns the badges newly
    /// awarded by this call.
    pub async fn evaluate_module_completion(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<Vec<BadgeId>, DomainError> {
        let module = self
            .catalog
            .get_module(module_id)
            .await?
            .ok_or_else(|| DomainError::module_not_found(module_id))?;

        let completed = self.completed_module_ids(user_id).await?;
        let mut newly_awarded = Vec::new();

        let mandatory = self.catalog.list_mandatory_module_ids().await?;
        if mandatory_completion_satisfied(&mandatory, &completed)
            && self.award(user_id, mandatory_completion()).await?
        {
            newly_awarded.push(mandatory_completion());
        }

        // The self-learned rule only fires off the back of an optional
        // module completion.
        if module.completion_mode() == CompletionMode::NonMandatory {
            let optional = self.optional_module_ids().await?;
            if self_learned_completion_satisfied(
                &optional,
                &completed,
                self.scoring.self_learned_threshold,
            ) && self.award(user_id, self_learned_completion()).await?
            {
                newly_awarded.push(self_learned_completion());
            }
        }

        Ok(newly_awarded)
    }

    /// Awards the perfect-quiz-score badge, independent of module status.
    /// Returns true if it was newly earned.
    pub async fn award_perfect_score(&self, user_id: &UserId) -> Result<bool, DomainError> {
        self.award(user_id, perfect_quiz_score()).await
    }

    /// Snapshot-read the achievements, apply the delta, write the full
    /// set back. Returns true if the badge was newly earned.
    async fn award(&self, user_id: &UserId, badge: BadgeId) -> Result<bool, DomainError> {
        let mut achievements = self.trainee_store.get_achievements(user_id).await?;
        if !achievements.award(badge.clone()) {
            debug!(user_id = %user_id, badge = %badge, "badge already held");
            return Ok(false);
        }
        self.trainee_store
            .upsert_achievements(user_id, &achievements)
            .await?;
        info!(user_id = %user_id, badge = %badge, "badge awarded");
        Ok(true)
    }

    async fn completed_module_ids(
        &self,
        user_id: &UserId,
    ) -> Result<BTreeSet<ModuleId>, DomainError> {
        Ok(self
            .progress_store
            .list_for_user(user_id)
            .await?
            .into_iter()
            .filter(|entry| entry.is_completed())
            .map(|entry| entry.module_id().clone())
            .collect())
    }

    async fn optional_module_ids(&self) -> Result<BTreeSet<ModuleId>, DomainError> {
        Ok(self
            .catalog
            .list_all_modules()
            .await?
            .into_iter()
            .filter(|m| !m.completion_mode().is_mandatory())
            .map(|m| m.id().clone())
            .collect())
    }
}
