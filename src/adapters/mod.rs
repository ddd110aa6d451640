//! Adapters - implementations of the ports.
//!
//! Only in-memory adapters live in this crate; durable persistence is the
//! concern of the surrounding service.

pub mod memory;

pub use memory::{
    InMemoryCatalog, InMemoryProgressStore, InMemoryQuizAttemptStore, InMemoryTraineeStore,
};
