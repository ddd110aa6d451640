//! Command and query handlers.

pub mod achievement;
pub mod leaderboard;
pub mod progress;
pub mod quiz;

pub use achievement::BadgeEvaluator;
pub use leaderboard::GetLeaderboardHandler;
pub use progress::{
    CompleteSubModuleCommand, CompleteSubModuleHandler, GetTraineeProgressHandler,
    TraineeProgressSummary,
};
pub use quiz::{SubmitQuizCommand, SubmitQuizHandler};
