//! Progress handlers.

mod complete_sub_module;
mod get_trainee_progress;

pub use complete_sub_module::{CompleteSubModuleCommand, CompleteSubModuleHandler};
pub use get_trainee_progress::{GetTraineeProgressHandler, TraineeProgressSummary};
