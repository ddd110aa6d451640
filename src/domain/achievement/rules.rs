//! Pure badge award rules over module id sets.

use std::collections::BTreeSet;

use crate::domain::foundation::ModuleId;

/// The mandatory-completion rule: every mandatory module id appears in the
/// trainee's completed set.
///
/// An empty mandatory set is vacuously satisfied.
pub fn mandatory_completion_satisfied(
    mandatory: &BTreeSet<ModuleId>,
    completed: &BTreeSet<ModuleId>,
) -> bool {
    mandatory.is_subset(completed)
}

/// The self-learned rule: the trainee has completed at least `threshold`
/// optional (non-mandatory) modules.
pub fn self_learned_completion_satisfied(
    optional: &BTreeSet<ModuleId>,
    completed: &BTreeSet<ModuleId>,
    threshold: u32,
) -> bool {
    let completed_optional = completed.intersection(optional).count() as u32;
    completed_optional >= threshold
}
