//! Core data models for the trip budget planner
//!
//! This module contains the data structures of the planning domain: money,
//! categories, expenses and the session parameters.

pub mod category;
pub mod expense;
pub mod money;
pub mod parameters;

pub use category::{Category, CategoryTotals};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use parameters::SessionParameters;
