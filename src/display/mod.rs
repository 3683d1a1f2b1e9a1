//! Display formatting for terminal output
//!
//! Formats trip parameters, expenses, running totals and the final summary
//! for the interactive terminal. Plain-text rendering for the trip document
//! lives in [`crate::mirror`].

pub mod trip;

pub use trip::{
    format_expense, format_expense_list, format_parameters, format_summary, format_totals_table,
    outcome_message,
};
