//! Completion calculator - derives percentage and status from raw signals.

use std::collections::BTreeSet;

use crate::domain::catalog::ModuleDefinition;
use crate::domain::foundation::{Percentage, ProgressStatus, SubModuleId};

/// Derived completion state for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub percentage: Percentage,
    pub status: ProgressStatus,
}

impl Completion {
    /// Computes completion from the module shape and the trainee's signals.
    ///
    /// Units are the module's sub-modules plus one for a counted quiz
    /// (see [`ModuleDefinition::total_units`]). Completed sub-module ids
    /// that do not belong to the module are not counted; callers are
    /// expected to have rejected them at the boundary already.
    pub fn compute(
        module: &ModuleDefinition,
        completed_sub_modules: &BTreeSet<SubModuleId>,
        quiz_completed: bool,
    ) -> Self {
        let total_units = module.total_units();

        let completed_known = completed_sub_modules
            .iter()
            .filter(|id| module.contains_sub_module(id))
            .count() as u32;

        let quiz_unit = if quiz_completed && module.quiz_counts_toward_completion() {
            1
        } else {
            0
        };

        let percentage = Percentage::from_ratio(completed_known + quiz_unit, total_units);
        let status = ProgressStatus::from_percentage(percentage);

        Self { percentage, status }
    }
}
