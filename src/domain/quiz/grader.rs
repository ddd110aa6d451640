//! Quiz grader - pure scoring of a submission against a quiz definition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::QuizDefinition;
use crate::domain::foundation::{DomainError, Percentage, QuestionId};

/// One submitted answer, keyed by question id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    pub selected_answer: String,
}

impl SubmittedAnswer {
    pub fn new(question_id: QuestionId, selected_answer: impl Into<String>) -> Self {
        Self {
            question_id,
            selected_answer: selected_answer.into(),
        }
    }
}

/// The result of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOutcome {
    pub raw_score: u32,
    pub max_score: u32,
    pub percentage: Percentage,
}

impl GradeOutcome {
    /// A perfect score: every question answered correctly, and the quiz
    /// actually had questions.
    pub fn is_perfect(&self) -> bool {
        self.raw_score == self.max_score && self.raw_score > 0
    }
}

/// Grades a submission against the quiz's answer key.
///
/// One point per question whose submitted answer exactly equals the
/// expected answer (case-sensitive). Answers referencing unknown question
/// ids are not counted; for duplicate answers to one question, only the
/// first is graded. Fails with `QuizDisabled` when the quiz is not open
/// for submission.
pub fn grade(
    quiz: &QuizDefinition,
    answers: &[SubmittedAnswer],
) -> Result<GradeOutcome, DomainError> {
    if !quiz.is_enabled() {
        return Err(DomainError::quiz_disabled(quiz.id()));
    }

    let mut graded: BTreeSet<&QuestionId> = BTreeSet::new();
    let mut raw_score = 0u32;

    for answer in answers {
        let Some(question) = quiz.question(&answer.question_id) else {
            continue;
        };
        if !graded.insert(&answer.question_id) {
            continue;
        }
        if answer.selected_answer == question.expected_answer() {
            raw_score += 1;
        }
    }

    let max_score = quiz.question_count();
    let percentage = Percentage::from_ratio(raw_score, max_score);

    Ok(GradeOutcome {
        raw_score,
        max_score,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Question;
    use crate::domain::foundation::{ErrorCode, ModuleId, QuizId};

    fn five_question_quiz(enabled: bool) -> QuizDefinition {
        let questions = (1..=5)
            .map(|i| {
                Question::new(
                    QuestionId::new(format!("q{}", i)),
                    format!("Question {}", i),
                    format!("answer-{}", i),
                )
            })
            .collect();
        QuizDefinition::new(
            QuizId::new("quiz-1"),
            ModuleId::new("mod-1"),
            "Safety Check",
            questions,
            enabled,
        )
    }

    fn answers(pairs: &[(&str, &str)]) -> Vec<SubmittedAnswer> {
        pairs
            .iter()
            .map(|(q, a)| SubmittedAnswer::new(QuestionId::new(*q), *a))
            .collect()
    }

    #[test]
    fn four_of_five_correct_scores_eighty() {
        let quiz = five_question_quiz(true);
        let outcome = grade(
            &quiz,
            &answers(&[
                ("q1", "answer-1"),
                ("q2", "answer-2"),
                ("q3", "answer-3"),
                ("q4", "answer-4"),
                ("q5", "wrong"),
            ]),
        )
        .unwrap();

        assert_eq!(outcome.raw_score, 4);
        assert_eq!(outcome.max_score, 5);
        assert_eq!(outcome.percentage.value(), 80);
        assert!(!outcome.is_perfect());
    }

    #[test]
    fn all_correct_is_perfect() {
        let quiz = five_question_quiz(true);
        let outcome = grade(
            &quiz,
            &answers(&[
                ("q1", "answer-1"),
                ("q2", "answer-2"),
                ("q3", "answer-3"),
                ("q4", "answer-4"),
                ("q5", "answer-5"),
            ]),
        )
        .unwrap();

        assert_eq!(outcome.percentage, Percentage::HUNDRED);
        assert!(outcome.is_perfect());
    }

    #[test]
    fn disabled_quiz_rejects_submission() {
        let quiz = five_question_quiz(false);
        let err = grade(&quiz, &answers(&[("q1", "answer-1")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::QuizDisabled);
    }

    #[test]
    fn unknown_question_ids_are_not_counted() {
        let quiz = five_question_quiz(true);
        let outcome = grade(
            &quiz,
            &answers(&[("q1", "answer-1"), ("q99", "answer-1")]),
        )
        .unwrap();
        assert_eq!(outcome.raw_score, 1);
        assert_eq!(outcome.percentage.value(), 20);
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        let quiz = five_question_quiz(true);
        let outcome = grade(
            &quiz,
            &answers(&[("q1", "Answer-1"), ("q2", " answer-2")]),
        )
        .unwrap();
        assert_eq!(outcome.raw_score, 0);
    }

    #[test]
    fn duplicate_answers_grade_first_only() {
        let quiz = five_question_quiz(true);
        let outcome = grade(
            &quiz,
            &answers(&[("q1", "wrong"), ("q1", "answer-1"), ("q2", "answer-2")]),
        )
        .unwrap();
        // q1's first answer is wrong; its correct duplicate is ignored
        assert_eq!(outcome.raw_score, 1);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let quiz = five_question_quiz(true);
        let outcome = grade(&quiz, &[]).unwrap();
        assert_eq!(outcome.raw_score, 0);
        assert_eq!(outcome.percentage, Percentage::ZERO);
        assert!(!outcome.is_perfect());
    }

    #[test]
    fn zero_question_quiz_scores_zero_and_is_not_perfect() {
        let quiz = QuizDefinition::new(
            QuizId::new("quiz-empty"),
            ModuleId::new("mod-1"),
            "Empty",
            vec![],
            true,
        );
        let outcome = grade(&quiz, &[]).unwrap();
        assert_eq!(outcome.max_score, 0);
        assert_eq!(outcome.percentage, Percentage::ZERO);
        assert!(!outcome.is_perfect());
    }
}
