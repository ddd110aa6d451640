//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Write handlers fold events into the progress ledger and hand
//! newly completed modules to the badge evaluator; read handlers shape
//! ledger state for callers.

pub mod handlers;

pub use handlers::{
    BadgeEvaluator, CompleteSubModuleCommand, CompleteSubModuleHandler, GetLeaderboardHandler,
    GetTraineeProgressHandler, SubmitQuizCommand, SubmitQuizHandler, TraineeProgressSummary,
};
