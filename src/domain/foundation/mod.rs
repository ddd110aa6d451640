//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Trailhead domain.

mod completion_mode;
mod errors;
mod ids;
mod percentage;
mod progress_status;
mod timestamp;

pub use completion_mode::CompletionMode;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AttemptId, BadgeId, EntryId, ModuleId, QuestionId, QuizId, SubModuleId, UserId};
pub use percentage::Percentage;
pub use progress_status::ProgressStatus;
pub use timestamp::Timestamp;
