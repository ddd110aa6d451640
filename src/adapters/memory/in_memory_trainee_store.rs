//! In-Memory Trainee Store Adapter
//!
//! Keeps trainees in insertion order so leaderboard tie-breaking is
//! deterministic in tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::achievement::TraineeAchievements;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::trainee::{Role, Trainee};
use crate::ports::TraineeStore;

/// In-memory storage for trainee records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTraineeStore {
    trainees: Arc<RwLock<Vec<Trainee>>>,
}

impl InMemoryTraineeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with trainees, preserving their order.
    pub fn with_trainees(trainees: Vec<Trainee>) -> Self {
        Self {
            trainees: Arc::new(RwLock::new(trainees)),
        }
    }

    /// Add a trainee at the end of the listing order.
    pub async fn insert(&self, trainee: Trainee) {
        self.trainees.write().await.push(trainee);
    }
}

#[async_trait]
impl TraineeStore for InMemoryTraineeStore {
    async fn find_trainee(&self, user_id: &UserId) -> Result<Option<Trainee>, DomainError> {
        let trainees = self.trainees.read().await;
        Ok(trainees.iter().find(|t| &t.id == user_id).cloned())
    }

    async fn list_trainees(&self, role: Role) -> Result<Vec<Trainee>, DomainError> {
        let trainees = self.trainees.read().await;
        Ok(trainees.iter().filter(|t| t.role == role).cloned().collect())
    }

    async fn get_achievements(
        &self,
        user_id: &UserId,
    ) -> Result<TraineeAchievements, DomainError> {
        let trainees = self.trainees.read().await;
        trainees
            .iter()
            .find(|t| &t.id == user_id)
            .map(|t| t.achievements.clone())
            .ok_or_else(|| DomainError::trainee_not_found(user_id))
    }

    async fn upsert_achievements(
        &self,
        user_id: &UserId,
        achievements: &TraineeAchievements,
    ) -> Result<(), DomainError> {
        let mut trainees = self.trainees.write().await;
        let trainee = trainees
            .iter_mut()
            .find(|t| &t.id == user_id)
            .ok_or_else(|| DomainError::trainee_not_found(user_id))?;
        trainee.achievements = achievements.clone();
        Ok(())
    }
}
