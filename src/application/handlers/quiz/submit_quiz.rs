//! SubmitQuizHandler - grades a submission and folds it into progress.
//!
//! A submission is graded at most once per (trainee, quiz): the first
//! graded attempt latches, and later submissions are rejected with
//! `QuizAlreadyCompleted`. Grading refreshes the owning module's ledger
//! entry, re-checks badges on completion, and a flawless submission earns
//! the perfect-score badge regardless of module status.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::achievement::BadgeEvaluator;
use crate::domain::foundation::{DomainError, Percentage, QuizId, Timestamp, UserId};
use crate::domain::progress::ProgressLedgerEntry;
use crate::domain::quiz::{grade, QuizAttempt, SubmittedAnswer};
use crate::ports::{ModuleCatalog, ProgressStore, QuizAttemptStore};

/// Command carrying a trainee's answers for one quiz.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub user_id: UserId,
    pub quiz_id: QuizId,
    pub answers: Vec<SubmittedAnswer>,
}

/// Handler for quiz submissions.
pub struct SubmitQuizHandler {
    catalog: Arc<dyn ModuleCatalog>,
    attempt_store: Arc<dyn QuizAttemptStore>,
    progress_store: Arc<dyn ProgressStore>,
    badge_evaluator: Arc<BadgeEvaluator>,
}

impl SubmitQuizHandler {
    pub fn new(
        catalog: Arc<dyn ModuleCatalog>,
        attempt_store: Arc<dyn QuizAttemptStore>,
        progress_store: Arc<dyn ProgressStore>,
        badge_evaluator: Arc<BadgeEvaluator>,
    ) -> Self {
        Self {
            catalog,
            attempt_store,
            progress_store,
            badge_evaluator,
        }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<Percentage, DomainError> {
        // 1. Resolve the quiz and grade; a disabled quiz rejects here
        let quiz = self
            .catalog
            .get_quiz(&cmd.quiz_id)
            .await?
            .ok_or_else(|| DomainError::quiz_not_found(&cmd.quiz_id))?;

        let outcome = grade(&quiz, &cmd.answers)?;

        // 2. One graded attempt per (trainee, quiz)
        if let Some(existing) = self.attempt_store.find(&cmd.user_id, &cmd.quiz_id).await? {
            if existing.is_completed() {
                return Err(DomainError::quiz_already_completed(&cmd.quiz_id));
            }
        }

        let now = Timestamp::now();
        let attempt = QuizAttempt::record(cmd.user_id.clone(), cmd.quiz_id.clone(), outcome, now);
        self.attempt_store.upsert(&attempt).await?;

        // 3. Refresh the owning module's ledger entry
        let module = self
            .catalog
            .get_module(quiz.module_id())
            .await?
            .ok_or_else(|| DomainError::module_not_found(quiz.module_id()))?;

        let mut entry = self
            .progress_store
            .find(&cmd.user_id, quiz.module_id())
            .await?
            .unwrap_or_else(|| {
                ProgressLedgerEntry::start(cmd.user_id.clone(), quiz.module_id().clone(), now)
            });

        entry.mark_quiz_completed();
        entry.refresh(&module, now);
        self.progress_store.upsert(&entry).await?;

        debug!(
            user_id = %cmd.user_id,
            quiz_id = %cmd.quiz_id,
            score = %outcome.percentage,
            module_status = %entry.status(),
            "quiz submission graded"
        );

        // 4. Badges: module completion, then the independent perfect-score rule
        if entry.is_completed() {
            self.badge_evaluator
                .evaluate_module_completion(&cmd.user_id, quiz.module_id())
                .await?;
        }

        if outcome.is_perfect() {
            self.badge_evaluator.award_perfect_score(&cmd.user_id).await?;
        }

        Ok(outcome.percentage)
    }
}
