//! QuizDefinition - a module's quiz as published by the catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ModuleId, QuestionId, QuizId};

/// A single quiz question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    expected_answer: String,
}

impl Question {
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }
}

/// A quiz attached to a module.
///
/// The `enabled` flag gates submission; a disabled quiz rejects all
/// submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    id: QuizId,
    module_id: ModuleId,
    title: String,
    questions: Vec<Question>,
    enabled: bool,
}

impl QuizDefinition {
    pub fn new(
        id: QuizId,
        module_id: ModuleId,
        title: impl Into<String>,
        questions: Vec<Question>,
        enabled: bool,
    ) -> Self {
        Self {
            id,
            module_id,
            title: title.into(),
            questions,
            enabled,
        }
    }

    pub fn id(&self) -> &QuizId {
        &self.id
    }

    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of questions; one point each when grading.
    pub fn question_count(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}
