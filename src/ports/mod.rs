//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `ModuleCatalog` - read-only module and quiz definitions
//! - `ProgressStore` - per-(trainee, module) ledger entries
//! - `QuizAttemptStore` - per-(trainee, quiz) graded attempts
//! - `TraineeStore` - trainee records and their achievements

mod module_catalog;
mod progress_store;
mod quiz_attempt_store;
mod trainee_store;

pub use module_catalog::ModuleCatalog;
pub use progress_store::ProgressStore;
pub use quiz_attempt_store::QuizAttemptStore;
pub use trainee_store::TraineeStore;
