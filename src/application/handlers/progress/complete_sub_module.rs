//! CompleteSubModuleHandler - records a sub-module completion.
//!
//! Folds the completion into the trainee's ledger entry, recomputes the
//! derived percentage and status, and re-checks badge rules when the
//! module lands on COMPLETED. Safe to call repeatedly with the same
//! sub-module.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::achievement::BadgeEvaluator;
use crate::domain::foundation::{DomainError, ModuleId, SubModuleId, Timestamp, UserId};
use crate::domain::progress::ProgressLedgerEntry;
use crate::ports::{ModuleCatalog, ProgressStore};

/// Command to record one completed sub-module.
#[derive(Debug, Clone)]
pub struct CompleteSubModuleCommand {
    pub user_id: UserId,
    pub module_id: ModuleId,
    pub sub_module_id: SubModuleId,
}

/// Handler for sub-module completion events.
pub struct CompleteSubModuleHandler {
    catalog: Arc<dyn ModuleCatalog>,
    progress_store: Arc<dyn ProgressStore>,
    badge_evaluator: Arc<BadgeEvaluator>,
}

impl CompleteSubModuleHandler {
    pub fn new(
        catalog: Arc<dyn ModuleCatalog>,
        progress_store: Arc<dyn ProgressStore>,
        badge_evaluator: Arc<BadgeEvaluator>,
    ) -> Self {
        Self {
            catalog,
            progress_store,
            badge_evaluator,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteSubModuleCommand,
    ) -> Result<ProgressLedgerEntry, DomainError> {
        // 1. Resolve the module and validate the reference before any write
        let module = self
            .catalog
            .get_module(&cmd.module_id)
            .await?
            .ok_or_else(|| DomainError::module_not_found(&cmd.module_id))?;

        if !module.contains_sub_module(&cmd.sub_module_id) {
            return Err(DomainError::unknown_sub_module(
                &cmd.module_id,
                &cmd.sub_module_id,
            ));
        }

        // 2. Load or lazily create the ledger entry
        let now = Timestamp::now();
        let mut entry = self
            .progress_store
            .find(&cmd.user_id, &cmd.module_id)
            .await?
            .unwrap_or_else(|| {
                ProgressLedgerEntry::start(cmd.user_id.clone(), cmd.module_id.clone(), now)
            });

        // 3. Fold in the completion and recompute derived state
        entry.record_sub_module(cmd.sub_module_id.clone());
        entry.refresh(&module, now);

        // 4. Persist, then re-check badges
        self.progress_store.upsert(&entry).await?;

        debug!(
            user_id = %cmd.user_id,
            module_id = %cmd.module_id,
            percentage = entry.completion_percentage().value(),
            status = %entry.status(),
            "sub-module completion recorded"
        );

        if entry.is_completed() {
            self.badge_evaluator
                .evaluate_module_completion(&cmd.user_id, &cmd.module_id)
                .await?;
        }

        Ok(entry)
    }
}
