//! Interactive planning session
//!
//! Collects the trip parameters once, then expenses in a loop, and finally
//! reports what is left of the budget.

pub mod controller;
pub mod steps;

pub use controller::{Session, SessionReport};
