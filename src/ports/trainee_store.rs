//! Trainee store port.
//!
//! Trainee records are owned by the user system; the engine reads them and
//! writes back achievements only. Achievement writes follow a
//! snapshot-read / compute-delta / write-back pattern, deferring atomicity
//! to the store's upsert contract.

use async_trait::async_trait;

use crate::domain::achievement::TraineeAchievements;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::trainee::{Role, Trainee};

/// Access to trainee records and their achievements.
#[async_trait]
pub trait TraineeStore: Send + Sync {
    /// Find a trainee by id.
    ///
    /// Returns `None` if not found.
    async fn find_trainee(&self, user_id: &UserId) -> Result<Option<Trainee>, DomainError>;

    /// All users holding the given role, in the store's stable listing
    /// order (the leaderboard's tie-break order).
    async fn list_trainees(&self, role: Role) -> Result<Vec<Trainee>, DomainError>;

    /// Current achievement snapshot for a trainee.
    ///
    /// # Errors
    ///
    /// - `TraineeNotFound` if no such user exists
    async fn get_achievements(&self, user_id: &UserId)
        -> Result<TraineeAchievements, DomainError>;

    /// Replace a trainee's achievement set.
    ///
    /// The write must be atomic per user.
    ///
    /// # Errors
    ///
    /// - `TraineeNotFound` if no such user exists
    /// - `StorageError` on persistence failure
    async fn upsert_achievements(
        &self,
        user_id: &UserId,
        achievements: &TraineeAchievements,
    ) -> Result<(), DomainError>;
}
