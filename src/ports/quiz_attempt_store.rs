//! Quiz attempt store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, QuizId, UserId};
use crate::domain::quiz::QuizAttempt;

/// Persistence for graded quiz attempts.
#[async_trait]
pub trait QuizAttemptStore: Send + Sync {
    /// Find the attempt for one trainee and quiz.
    ///
    /// Returns `None` if the trainee has never submitted.
    async fn find(
        &self,
        user_id: &UserId,
        quiz_id: &QuizId,
    ) -> Result<Option<QuizAttempt>, DomainError>;

    /// Insert or replace an attempt.
    ///
    /// The write must be atomic per (user, quiz) key.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn upsert(&self, attempt: &QuizAttempt) -> Result<(), DomainError>;

    /// All attempts for one trainee.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<QuizAttempt>, DomainError>;
}
