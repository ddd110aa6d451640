//! Leaderboard scoring.

mod scorer;

pub use scorer::{rank, score_trainee, LeaderboardEntry};
