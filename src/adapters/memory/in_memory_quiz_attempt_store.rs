//! In-Memory Quiz Attempt Store Adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, QuizId, UserId};
use crate::domain::quiz::QuizAttempt;
use crate::ports::QuizAttemptStore;

/// In-memory storage for quiz attempts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizAttemptStore {
    attempts: Arc<RwLock<HashMap<(UserId, QuizId), QuizAttempt>>>,
}

impl InMemoryQuizAttemptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored attempts (useful for tests).
    pub async fn attempt_count(&self) -> usize {
        self.attempts.read().await.len()
    }
}

#[async_trait]
impl QuizAttemptStore for InMemoryQuizAttemptStore {
    async fn find(
        &self,
        user_id: &UserId,
        quiz_id: &QuizId,
    ) -> Result<Option<QuizAttempt>, DomainError> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(&(user_id.clone(), quiz_id.clone())).cloned())
    }

    async fn upsert(&self, attempt: &QuizAttempt) -> Result<(), DomainError> {
        let mut attempts = self.attempts.write().await;
        attempts.insert(
            (attempt.user_id().clone(), attempt.quiz_id().clone()),
            attempt.clone(),
        );
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<QuizAttempt>, DomainError> {
        let attempts = self.attempts.read().await;
        let mut result: Vec<QuizAttempt> = attempts
            .values()
            .filter(|a| a.user_id() == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.quiz_id().cmp(b.quiz_id()));
        Ok(result)
    }
}
