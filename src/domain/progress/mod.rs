//! Progress tracking - the per-(trainee, module) ledger and its calculator.

mod completion;
mod ledger_entry;

pub use completion::Completion;
pub use ledger_entry::ProgressLedgerEntry;
