//! Progress store port.
//!
//! Persists ledger entries keyed by (user, module). Implementations are
//! expected to serialize read-modify-write cycles per trainee; the engine
//! performs no locking of its own.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ModuleId, UserId};
use crate::domain::progress::ProgressLedgerEntry;

/// Persistence for progress ledger entries.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Find the entry for one trainee and module.
    ///
    /// Returns `None` if the trainee has never touched the module.
    async fn find(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<Option<ProgressLedgerEntry>, DomainError>;

    /// Insert or replace an entry.
    ///
    /// The write must be atomic per (user, module) key.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn upsert(&self, entry: &ProgressLedgerEntry) -> Result<(), DomainError>;

    /// All entries for one trainee.
    async fn list_for_user(&self, user_id: &UserId)
        -> Result<Vec<ProgressLedgerEntry>, DomainError>;
}
