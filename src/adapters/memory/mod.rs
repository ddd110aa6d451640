//! In-memory port implementations.
//!
//! Used by tests and development wiring. State lives behind
//! `tokio::sync::RwLock`, so each call is atomic per store.

mod in_memory_catalog;
mod in_memory_progress_store;
mod in_memory_quiz_attempt_store;
mod in_memory_trainee_store;

pub use in_memory_catalog::InMemoryCatalog;
pub use in_memory_progress_store::InMemoryProgressStore;
pub use in_memory_quiz_attempt_store::InMemoryQuizAttemptStore;
pub use in_memory_trainee_store::InMemoryTraineeStore;
