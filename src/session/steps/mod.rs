//! Session steps
//!
//! Individual confirmation-gated steps in the session flow.

pub mod expense;
pub mod parameters;

pub use expense::ExpenseStep;
pub use parameters::ParameterStep;
