//! Trip parameters
//!
//! The budget, trip length and daily spending target collected at the start
//! of a session. They are fixed once the user confirms them.

use super::money::Money;

/// Confirmed parameters for a planning session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParameters {
    /// Total trip budget, greater than zero
    pub budget: Money,

    /// Trip length in days, greater than zero
    pub duration_days: u32,

    /// Desired spend per day, greater than zero
    pub daily_spend_target: Money,
}

impl SessionParameters {
    pub fn new(budget: Money, duration_days: u32, daily_spend_target: Money) -> Self {
        Self {
            budget,
            duration_days,
            daily_spend_target,
        }
    }

    /// Budget spread evenly over the trip, before any expenses
    pub fn budget_per_day(&self) -> Money {
        self.budget.split_even(self.duration_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_per_day() {
        let params = SessionParameters::new(Money::from_cents(100_000), 5, Money::from_cents(10_000));
        assert_eq!(params.budget_per_day().cents(), 20_000);
    }
}
