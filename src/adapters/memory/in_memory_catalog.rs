//! In-Memory Module Catalog Adapter
//!
//! Serves module and quiz definitions from maps built at construction.
//! Useful for testing and development.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::domain::catalog::{ModuleDefinition, QuizDefinition};
use crate::domain::foundation::{DomainError, ModuleId, QuizId};
use crate::ports::ModuleCatalog;

/// In-memory catalog seeded with fixed definitions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    modules: HashMap<ModuleId, ModuleDefinition>,
    quizzes: HashMap<QuizId, QuizDefinition>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given modules and quizzes.
    pub fn with_definitions(
        modules: Vec<ModuleDefinition>,
        quizzes: Vec<QuizDefinition>,
    ) -> Self {
        Self {
            modules: modules
                .into_iter()
                .map(|m| (m.id().clone(), m))
                .collect(),
            quizzes: quizzes
                .into_iter()
                .map(|q| (q.id().clone(), q))
                .collect(),
        }
    }

    /// Number of modules in the catalog.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

#[async_trait]
impl ModuleCatalog for InMemoryCatalog {
    async fn get_module(&self, id: &ModuleId) -> Result<Option<ModuleDefinition>, DomainError> {
        Ok(self.modules.get(id).cloned())
    }

    async fn get_quiz(&self, id: &QuizId) -> Result<Option<QuizDefinition>, DomainError> {
        Ok(self.quizzes.get(id).cloned())
    }

    async fn list_mandatory_module_ids(&self) -> Result<BTreeSet<ModuleId>, DomainError> {
        Ok(self
            .modules
            .values()
            .filter(|m| m.completion_mode().is_mandatory())
            .map(|m| m.id().clone())
            .collect())
    }

    async fn list_all_modules(&self) -> Result<Vec<ModuleDefinition>, DomainError> {
        let mut modules: Vec<ModuleDefinition> = self.modules.values().cloned().collect();
        modules.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(modules)
    }
}
