//! Expense model
//!
//! A single confirmed trip cost. Expenses are built by the expense step and
//! handed to the ledger once the user confirms them; they are never edited.

use std::fmt;

use super::category::Category;
use super::money::Money;

/// A trip expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// What the money was spent on (never empty or purely numeric)
    pub description: String,

    /// Amount spent, always greater than zero
    pub cost: Money,

    /// Category the expense is recorded against
    pub category: Category,
}

impl Expense {
    /// Create a new expense
    pub fn new(description: impl Into<String>, cost: Money, category: Category) -> Self {
        Self {
            description: description.into(),
            cost,
            category,
        }
    }

    /// One-line summary using the given currency symbol
    pub fn summary_line(&self, symbol: &str) -> String {
        format!(
            "{}: {} ({})",
            self.description,
            self.cost.format_with_symbol(symbol),
            self.category
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.description, self.cost, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let expense = Expense::new("hotel", Money::from_cents(40_000), Category::Accommodation);
        assert_eq!(expense.to_string(), "hotel: £400.00 (Accommodation)");
    }

    #[test]
    fn test_summary_line_symbol() {
        let expense = Expense::new(
            "Return flight",
            Money::from_cents(123_450),
            Category::FlightsTransport,
        );
        assert_eq!(
            expense.summary_line("€"),
            "Return flight: €1,234.50 (Flights/Transport)"
        );
    }
}
