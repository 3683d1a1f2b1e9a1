//! Service layer for the trip budget planner
//!
//! Holds the expense ledger and the figures derived from it. Nothing here
//! performs I/O; the session controller sequences these calls with prompts
//! and document updates.

pub mod ledger;
pub mod summary;

pub use ledger::Ledger;
pub use summary::{BudgetSummary, Outcome};
