//! Expense ledger
//!
//! Accumulates confirmed expenses into per-category totals and a grand total.
//! The ledger only ever grows: there is no way to edit or remove an expense
//! once it has been recorded.

use tracing::debug;

use crate::models::{CategoryTotals, Expense, Money};

/// In-memory accumulator for a single planning session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    totals: CategoryTotals,
    total_spent: Money,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger with every category at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed expense
    pub fn accumulate(&mut self, expense: Expense) {
        self.totals.add(expense.category, expense.cost);
        self.total_spent = self.total_spent.saturating_add(expense.cost);
        debug!(
            category = %expense.category,
            cost = expense.cost.cents(),
            total_spent = self.total_spent.cents(),
            "Expense accumulated"
        );
        self.expenses.push(expense);
    }

    /// Budget left after everything recorded so far (may be negative)
    pub fn remaining(&self, budget: Money) -> Money {
        budget - self.total_spent
    }

    /// Spread a remaining amount over the trip
    ///
    /// `duration_days` is always positive for confirmed parameters.
    pub fn per_day(remaining: Money, duration_days: u32) -> Money {
        remaining.split_even(duration_days)
    }

    pub fn totals(&self) -> &CategoryTotals {
        &self.totals
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    /// Confirmed expenses in the order they were recorded
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of confirmed expenses
    pub fn count(&self) -> usize {
        self.expenses.len()
    }
}
