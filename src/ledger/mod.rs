//! Ledger domain models, the persisted snapshot, and summary queries.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod summary;

pub use entry::{Entry, EntryKind};
pub use ledger::Ledger;
pub use period::Period;
pub use summary::{entries_for, remainder, summarize, totals_for, Summary, Totals};
