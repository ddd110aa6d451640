//! In-Memory Progress Store Adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ModuleId, UserId};
use crate::domain::progress::ProgressLedgerEntry;
use crate::ports::ProgressStore;

/// In-memory storage for progress ledger entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressStore {
    entries: Arc<RwLock<HashMap<(UserId, ModuleId), ProgressLedgerEntry>>>,
}

impl InMemoryProgressStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (useful for tests).
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn find(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<Option<ProgressLedgerEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(user_id.clone(), module_id.clone()))
            .cloned())
    }

    async fn upsert(&self, entry: &ProgressLedgerEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            (entry.user_id().clone(), entry.module_id().clone()),
            entry.clone(),
        );
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ProgressLedgerEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut result: Vec<ProgressLedgerEntry> = entries
            .values()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.module_id().cmp(b.module_id()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn entry(user: &str, module: &str) -> ProgressLedgerEntry {
        ProgressLedgerEntry::start(
            UserId::new(user).unwrap(),
            ModuleId::new(module),
            Timestamp::from_unix_secs(1000),
        )
    }

    #[tokio::test]
    async fn find_returns_none_for_untouched_module() {
        let store = InMemoryProgressStore::new();
        let found = store
            .find(&UserId::new("t-1").unwrap(), &ModuleId::new("m-1"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_existing_entry() {
        let store = InMemoryProgressStore::new();
        let mut e = entry("t-1", "m-1");
        store.upsert(&e).await.unwrap();

        e.mark_quiz_completed();
        store.upsert(&e).await.unwrap();

        assert_eq!(store.entry_count().await, 1);
        let found = store
            .find(&UserId::new("t-1").unwrap(), &ModuleId::new("m-1"))
            .await
            .unwrap()
            .unwrap();
        assert!(found.quiz_completed());
    }

    #[tokio::test]
    async fn list_for_user_filters_and_orders() {
        let store = InMemoryProgressStore::new();
        store.upsert(&entry("t-1", "m-2")).await.unwrap();
        store.upsert(&entry("t-1", "m-1")).await.unwrap();
        store.upsert(&entry("t-2", "m-1")).await.unwrap();

        let listed = store.list_for_user(&UserId::new("t-1").unwrap()).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].module_id(), &ModuleId::new("m-1"));
        assert_eq!(listed[1].module_id(), &ModuleId::new("m-2"));
    }
}
