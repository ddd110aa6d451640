//! Catalog types - immutable module and quiz definitions.
//!
//! The catalog owns these records; the engine only reads them through the
//! `ModuleCatalog` port and never mutates them.

mod module;
mod quiz;

pub use module::ModuleDefinition;
pub use quiz::{Question, QuizDefinition};
