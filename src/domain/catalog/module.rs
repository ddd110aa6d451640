//! ModuleDefinition - a curriculum module as published by the catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompletionMode, ModuleId, QuizId, SubModuleId};

/// A curriculum module: ordered sub-modules plus an optional quiz.
///
/// Immutable from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    id: ModuleId,
    title: String,
    sub_module_ids: Vec<SubModuleId>,
    quiz_id: Option<QuizId>,
    completion_mode: CompletionMode,
}

impl ModuleDefinition {
    /// Creates a module definition.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        sub_module_ids: Vec<SubModuleId>,
        quiz_id: Option<QuizId>,
        completion_mode: CompletionMode,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            sub_module_ids,
            quiz_id,
            completion_mode,
        }
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sub_module_ids(&self) -> &[SubModuleId] {
        &self.sub_module_ids
    }

    pub fn quiz_id(&self) -> Option<&QuizId> {
        self.quiz_id.as_ref()
    }

    pub fn completion_mode(&self) -> CompletionMode {
        self.completion_mode
    }

    /// Returns true if the given sub-module belongs to this module.
    pub fn contains_sub_module(&self, id: &SubModuleId) -> bool {
        self.sub_module_ids.iter().any(|s| s == id)
    }

    /// Returns true if this module carries a quiz that counts toward
    /// completion (a quiz exists and the mode is not NON_MANDATORY).
    pub fn quiz_counts_toward_completion(&self) -> bool {
        self.quiz_id.is_some() && self.completion_mode.counts_quiz()
    }

    /// Total completion units: sub-modules, plus one for a counted quiz.
    pub fn total_units(&self) -> u32 {
        let quiz_unit = if self.quiz_counts_toward_completion() { 1 } else { 0 };
        self.sub_module_ids.len() as u32 + quiz_unit
    }
}
