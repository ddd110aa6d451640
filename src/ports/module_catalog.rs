//! Module catalog port (read side).
//!
//! The catalog owns module and quiz definitions; the engine only reads
//! them. Catalog management (create/update/delete) happens elsewhere.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::catalog::{ModuleDefinition, QuizDefinition};
use crate::domain::foundation::{DomainError, ModuleId, QuizId};

/// Read-only access to the curriculum catalog.
#[async_trait]
pub trait ModuleCatalog: Send + Sync {
    /// Find a module definition by id.
    ///
    /// Returns `None` if not found.
    async fn get_module(&self, id: &ModuleId) -> Result<Option<ModuleDefinition>, DomainError>;

    /// Find a quiz definition by id.
    ///
    /// Returns `None` if not found.
    async fn get_quiz(&self, id: &QuizId) -> Result<Option<QuizDefinition>, DomainError>;

    /// Ids of every module classified MANDATORY.
    async fn list_mandatory_module_ids(&self) -> Result<BTreeSet<ModuleId>, DomainError>;

    /// All module definitions in the catalog.
    async fn list_all_modules(&self) -> Result<Vec<ModuleDefinition>, DomainError>;
}
