//! CompletionMode enum classifying modules for completion and scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a module within the curriculum.
///
/// - `Mandatory`: required; quiz counts toward completion; earns points.
/// - `SelfLearned`: optional but counted; quiz counts; earns points.
/// - `NonMandatory`: optional and uncounted; quiz never counts toward
///   completion and the module contributes nothing to the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionMode {
    #[default]
    Mandatory,
    SelfLearned,
    NonMandatory,
}

impl CompletionMode {
    /// Returns true for modules the trainee must complete.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, CompletionMode::Mandatory)
    }

    /// Returns true if a module's quiz counts toward its completion.
    pub fn counts_quiz(&self) -> bool {
        matches!(self, CompletionMode::Mandatory | CompletionMode::SelfLearned)
    }

    /// Returns true if the module earns leaderboard points.
    pub fn awards_points(&self) -> bool {
        matches!(self, CompletionMode::Mandatory | CompletionMode::SelfLearned)
    }
}

impl fmt::Display for CompletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompletionMode::Mandatory => "Mandatory",
            CompletionMode::SelfLearned => "Self-Learned",
            CompletionMode::NonMandatory => "Non-Mandatory",
        };
        write!(f, "{}", s)
    }
}
