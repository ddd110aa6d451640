//! Quiz attempts and grading.

mod attempt;
mod grader;

pub use attempt::QuizAttempt;
pub use grader::{grade, GradeOutcome, SubmittedAnswer};
