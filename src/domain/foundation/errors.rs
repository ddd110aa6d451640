//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::{ModuleId, QuizId, SubModuleId, UserId};

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,

    // Not found errors
    ModuleNotFound,
    QuizNotFound,
    TraineeNotFound,

    // Reference errors
    UnknownSubModule,

    // Submission rejections
    QuizDisabled,
    QuizAlreadyCompleted,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::ModuleNotFound => "MODULE_NOT_FOUND",
            ErrorCode::QuizNotFound => "QUIZ_NOT_FOUND",
            ErrorCode::TraineeNotFound => "TRAINEE_NOT_FOUND",
            ErrorCode::UnknownSubModule => "UNKNOWN_SUB_MODULE",
            ErrorCode::QuizDisabled => "QUIZ_DISABLED",
            ErrorCode::QuizAlreadyCompleted => "QUIZ_ALREADY_COMPLETED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Module referenced by id does not exist.
    pub fn module_not_found(id: &ModuleId) -> Self {
        Self::new(
            ErrorCode::ModuleNotFound,
            format!("Module not found: {}", id),
        )
    }

    /// Quiz referenced by id does not exist.
    pub fn quiz_not_found(id: &QuizId) -> Self {
        Self::new(ErrorCode::QuizNotFound, format!("Quiz not found: {}", id))
    }

    /// Trainee referenced by id does not exist.
    pub fn trainee_not_found(id: &UserId) -> Self {
        Self::new(
            ErrorCode::TraineeNotFound,
            format!("Trainee not found: {}", id),
        )
    }

    /// A submitted sub-module id does not belong to the named module.
    pub fn unknown_sub_module(module_id: &ModuleId, sub_module_id: &SubModuleId) -> Self {
        Self::new(
            ErrorCode::UnknownSubModule,
            format!(
                "Sub-module {} does not belong to module {}",
                sub_module_id, module_id
            ),
        )
    }

    /// The quiz is not enabled for submission.
    pub fn quiz_disabled(id: &QuizId) -> Self {
        Self::new(
            ErrorCode::QuizDisabled,
            format!("Quiz {} is not enabled for submission", id),
        )
    }

    /// The trainee already holds a graded attempt for this quiz.
    pub fn quiz_already_completed(id: &QuizId) -> Self {
        Self::new(
            ErrorCode::QuizAlreadyCompleted,
            format!("Quiz {} already completed by trainee", id),
        )
    }

    /// Storage-layer failure.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
        };
        DomainError::new(code, err.to_string())
    }
}
