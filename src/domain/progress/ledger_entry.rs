//! ProgressLedgerEntry - the per-(trainee, module) progress aggregate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ModuleDefinition;
use crate::domain::foundation::{
    EntryId, ModuleId, Percentage, ProgressStatus, SubModuleId, Timestamp, UserId,
};
use crate::domain::progress::Completion;

/// Progress of one trainee through one module.
///
/// Created lazily on first interaction, updated in place, never deleted.
/// `completion_percentage` and `status` are derived through
/// [`Completion::compute`]; callers never set them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLedgerEntry {
    id: EntryId,
    user_id: UserId,
    module_id: ModuleId,
    completed_sub_module_ids: BTreeSet<SubModuleId>,
    quiz_completed: bool,
    completion_percentage: Percentage,
    status: ProgressStatus,
    last_accessed_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl ProgressLedgerEntry {
    /// Creates a fresh NOT_STARTED entry for a trainee and module.
    pub fn start(user_id: UserId, module_id: ModuleId, now: Timestamp) -> Self {
        Self {
            id: EntryId::new(),
            user_id,
            module_id,
            completed_sub_module_ids: BTreeSet::new(),
            quiz_completed: false,
            completion_percentage: Percentage::ZERO,
            status: ProgressStatus::NotStarted,
            last_accessed_at: now,
            completed_at: None,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    pub fn completed_sub_module_ids(&self) -> &BTreeSet<SubModuleId> {
        &self.completed_sub_module_ids
    }

    pub fn quiz_completed(&self) -> bool {
        self.quiz_completed
    }

    pub fn completion_percentage(&self) -> Percentage {
        self.completion_percentage
    }

    pub fn status(&self) -> ProgressStatus {
        self.status
    }

    pub fn last_accessed_at(&self) -> Timestamp {
        self.last_accessed_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Records a completed sub-module. Returns false if it was already
    /// recorded (the set never holds duplicates).
    pub fn record_sub_module(&mut self, sub_module_id: SubModuleId) -> bool {
        self.completed_sub_module_ids.insert(sub_module_id)
    }

    /// Latches the quiz-completed flag.
    pub fn mark_quiz_completed(&mut self) {
        self.quiz_completed = true;
    }

    /// Recomputes derived state after a real update.
    ///
    /// `last_accessed_at` only moves forward; `completed_at` is set on the
    /// first transition into COMPLETED and never changes afterwards, so
    /// refreshing an already-completed entry is idempotent.
    pub fn refresh(&mut self, module: &ModuleDefinition, now: Timestamp) {
        let completion = Completion::compute(
            module,
            &self.completed_sub_module_ids,
            self.quiz_completed,
        );

        self.completion_percentage = completion.percentage;
        self.status = completion.status;
        self.last_accessed_at = self.last_accessed_at.max(now);

        if completion.status.is_completed() && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CompletionMode, QuizId};

    fn test_module() -> ModuleDefinition {
        ModuleDefinition::new(
            ModuleId::new("mod-1"),
            "Workplace Safety",
            vec![
                SubModuleId::new("sub-a"),
                SubModuleId::new("sub-b"),
                SubModuleId::new("sub-c"),
                SubModuleId::new("sub-d"),
            ],
            Some(QuizId::new("quiz-1")),
            CompletionMode::Mandatory,
        )
    }

    fn fresh_entry() -> ProgressLedgerEntry {
        ProgressLedgerEntry::start(
            UserId::new("trainee-1").unwrap(),
            ModuleId::new("mod-1"),
            Timestamp::from_unix_secs(1000),
        )
    }

    #[test]
    fn fresh_entry_is_not_started() {
        let entry = fresh_entry();
        assert_eq!(entry.status(), ProgressStatus::NotStarted);
        assert_eq!(entry.completion_percentage(), Percentage::ZERO);
        assert!(!entry.quiz_completed());
        assert!(entry.completed_at().is_none());
    }

    #[test]
    fn record_sub_module_is_idempotent() {
        let mut entry = fresh_entry();
        assert!(entry.record_sub_module(SubModuleId::new("sub-a")));
        assert!(!entry.record_sub_module(SubModuleId::new("sub-a")));
        assert_eq!(entry.completed_sub_module_ids().len(), 1);
    }

    #[test]
    fn refresh_derives_percentage_and_status() {
        let module = test_module();
        let mut entry = fresh_entry();
        entry.record_sub_module(SubModuleId::new("sub-a"));
        entry.record_sub_module(SubModuleId::new("sub-b"));
        entry.refresh(&module, Timestamp::from_unix_secs(2000));

        // 2 of 5 units (4 subs + counted quiz)
        assert_eq!(entry.completion_percentage().value(), 40);
        assert_eq!(entry.status(), ProgressStatus::InProgress);
        assert!(entry.completed_at().is_none());
    }

    #[test]
    fn completing_all_units_sets_completed_at_once() {
        let module = test_module();
        let mut entry = fresh_entry();
        for sub in ["sub-a", "sub-b", "sub-c", "sub-d"] {
            entry.record_sub_module(SubModuleId::new(sub));
        }
        entry.mark_quiz_completed();

        let completion_time = Timestamp::from_unix_secs(5000);
        entry.refresh(&module, completion_time);

        assert_eq!(entry.status(), ProgressStatus::Completed);
        assert_eq!(entry.completion_percentage(), Percentage::HUNDRED);
        assert_eq!(entry.completed_at(), Some(completion_time));
    }

    #[test]
    fn refreshing_completed_entry_is_idempotent() {
        let module = test_module();
        let mut entry = fresh_entry();
        for sub in ["sub-a", "sub-b", "sub-c", "sub-d"] {
            entry.record_sub_module(SubModuleId::new(sub));
        }
        entry.mark_quiz_completed();

        let first = Timestamp::from_unix_secs(5000);
        entry.refresh(&module, first);
        let completed_at = entry.completed_at();

        // Recompute later; completed_at and percentage must not move
        entry.refresh(&module, Timestamp::from_unix_secs(9000));
        assert_eq!(entry.completed_at(), completed_at);
        assert_eq!(entry.completion_percentage(), Percentage::HUNDRED);
        assert_eq!(entry.status(), ProgressStatus::Completed);
    }

    #[test]
    fn last_accessed_at_never_goes_backwards() {
        let module = test_module();
        let mut entry = fresh_entry();
        entry.record_sub_module(SubModuleId::new("sub-a"));
        entry.refresh(&module, Timestamp::from_unix_secs(5000));
        assert_eq!(entry.last_accessed_at(), Timestamp::from_unix_secs(5000));

        // An out-of-order update with an earlier clock keeps the later stamp
        entry.record_sub_module(SubModuleId::new("sub-b"));
        entry.refresh(&module, Timestamp::from_unix_secs(3000));
        assert_eq!(entry.last_accessed_at(), Timestamp::from_unix_secs(5000));
    }

    #[test]
    fn status_and_percentage_agree_after_every_refresh() {
        let module = test_module();
        let mut entry = fresh_entry();
        let subs = ["sub-a", "sub-b", "sub-c", "sub-d"];
        for (i, sub) in subs.iter().enumerate() {
            entry.record_sub_module(SubModuleId::new(*sub));
            entry.refresh(&module, Timestamp::from_unix_secs(1000 + i as u64));
            assert_eq!(
                entry.status() == ProgressStatus::Completed,
                entry.completion_percentage() == Percentage::HUNDRED
            );
        }
        entry.mark_quiz_completed();
        entry.refresh(&module, Timestamp::from_unix_secs(2000));
        assert!(entry.is_completed());
    }

    #[test]
    fn serializes_round_trip() {
        let entry = fresh_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: ProgressLedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
