//! QuizAttempt - a trainee's single graded attempt at a quiz.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttemptId, Percentage, QuizId, Timestamp, UserId};
use crate::domain::quiz::GradeOutcome;

/// One trainee's attempt at one quiz.
///
/// Attempts are binary: the first graded submission latches `completed`
/// and the score; resubmission is rejected upstream. The raw and maximum
/// scores are kept alongside the rounded percentage so point scaling can
/// use the exact ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    id: AttemptId,
    user_id: UserId,
    quiz_id: QuizId,
    score: Percentage,
    raw_score: u32,
    max_score: u32,
    completed: bool,
    completed_at: Option<Timestamp>,
}

impl QuizAttempt {
    /// Records a graded submission as a completed attempt.
    pub fn record(user_id: UserId, quiz_id: QuizId, outcome: GradeOutcome, now: Timestamp) -> Self {
        Self {
            id: AttemptId::new(),
            user_id,
            quiz_id,
            score: outcome.percentage,
            raw_score: outcome.raw_score,
            max_score: outcome.max_score,
            completed: true,
            completed_at: Some(now),
        }
    }

    pub fn id(&self) -> AttemptId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    pub fn score(&self) -> Percentage {
        self.score
    }

    pub fn raw_score(&self) -> u32 {
        self.raw_score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Scales `max_points` by the attempt's exact raw/max ratio, floored.
    ///
    /// Uses the raw counts rather than the stored percentage so the result
    /// is not rounded twice.
    pub fn points_scaled(&self, max_points: u32) -> u32 {
        if self.max_score == 0 {
            return 0;
        }
        (max_points as u64 * self.raw_score as u64 / self.max_score as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(raw: u32, max: u32) -> GradeOutcome {
        GradeOutcome {
            raw_score: raw,
            max_score: max,
            percentage: Percentage::from_ratio(raw, max),
        }
    }

    fn attempt(raw: u32, max: u32) -> QuizAttempt {
        QuizAttempt::record(
            UserId::new("trainee-1").unwrap(),
            QuizId::new("quiz-1"),
            outcome(raw, max),
            Timestamp::from_unix_secs(1000),
        )
    }

    #[test]
    fn record_latches_completion() {
        let a = attempt(4, 5);
        assert!(a.is_completed());
        assert_eq!(a.score().value(), 80);
        assert_eq!(a.completed_at(), Some(Timestamp::from_unix_secs(1000)));
    }

    #[test]
    fn points_scaled_uses_raw_ratio() {
        // 4/5 of 50 points = 40
        assert_eq!(attempt(4, 5).points_scaled(50), 40);
        // floor(50 * 2/3) = 33
        assert_eq!(attempt(2, 3).points_scaled(50), 33);
    }

    #[test]
    fn points_scaled_handles_zero_max_score() {
        assert_eq!(attempt(0, 0).points_scaled(50), 0);
    }

    #[test]
    fn points_scaled_full_marks_gives_max_points() {
        assert_eq!(attempt(5, 5).points_scaled(50), 50);
    }

    #[test]
    fn serializes_round_trip() {
        let a = attempt(3, 5);
        let json = serde_json::to_string(&a).unwrap();
        let back: QuizAttempt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
