//! ProgressStatus enum for the module progress lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Percentage;

/// Lifecycle status of a trainee's progress through a module.
///
/// Always derived from the completion percentage; callers never set it
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// Derives the status from a completion percentage.
    ///
    /// COMPLETED iff 100, IN_PROGRESS iff above zero, NOT_STARTED otherwise.
    pub fn from_percentage(percentage: Percentage) -> Self {
        if percentage.is_full() {
            ProgressStatus::Completed
        } else if percentage > Percentage::ZERO {
            ProgressStatus::InProgress
        } else {
            ProgressStatus::NotStarted
        }
    }

    /// Returns true if work has begun.
    pub fn is_started(&self) -> bool {
        !matches!(self, ProgressStatus::NotStarted)
    }

    /// Returns true if the module is finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, ProgressStatus::Completed)
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressStatus::NotStarted => "Not Started",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_started() {
        assert_eq!(ProgressStatus::default(), ProgressStatus::NotStarted);
    }

    #[test]
    fn from_percentage_zero_is_not_started() {
        assert_eq!(
            ProgressStatus::from_percentage(Percentage::ZERO),
            ProgressStatus::NotStarted
        );
    }

    #[test]
    fn from_percentage_partial_is_in_progress() {
        assert_eq!(
            ProgressStatus::from_percentage(Percentage::new(1)),
            ProgressStatus::InProgress
        );
        assert_eq!(
            ProgressStatus::from_percentage(Percentage::new(99)),
            ProgressStatus::InProgress
        );
    }

    #[test]
    fn from_percentage_hundred_is_completed() {
        assert_eq!(
            ProgressStatus::from_percentage(Percentage::HUNDRED),
            ProgressStatus::Completed
        );
    }

    #[test]
    fn is_started_works_correctly() {
        assert!(!ProgressStatus::NotStarted.is_started());
        assert!(ProgressStatus::InProgress.is_started());
        assert!(ProgressStatus::Completed.is_started());
    }

    #[test]
    fn is_completed_works_correctly() {
        assert!(!ProgressStatus::NotStarted.is_completed());
        assert!(!ProgressStatus::InProgress.is_completed());
        assert!(ProgressStatus::Completed.is_completed());
    }

    #[test]
    fn serializes_to_screaming_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ProgressStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
        assert_eq!(
            serde_json::to_string(&ProgressStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::to_string(&ProgressStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }

    #[test]
    fn deserializes_from_screaming_snake_case_json() {
        let status: ProgressStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, ProgressStatus::InProgress);
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", ProgressStatus::NotStarted), "Not Started");
        assert_eq!(format!("{}", ProgressStatus::Completed), "Completed");
    }
}
