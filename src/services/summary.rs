//! End-of-session budget summary
//!
//! Derives the remaining budget, the remaining allowance per day and the
//! on/over budget outcome from the confirmed parameters and the ledger.

use crate::config::settings::OutcomeRule;
use crate::models::{Money, SessionParameters};

use super::ledger::Ledger;

/// Whether the trip is still within budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OnBudget,
    OverBudget,
}

impl Outcome {
    pub fn is_on_budget(&self) -> bool {
        matches!(self, Self::OnBudget)
    }
}

/// Figures reported when the user stops adding expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub budget: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub remaining_per_day: Money,
    pub daily_spend_target: Money,
    pub duration_days: u32,
    pub outcome: Outcome,
}

impl BudgetSummary {
    /// Compute the summary for the current ledger state
    pub fn compute(params: &SessionParameters, ledger: &Ledger, rule: OutcomeRule) -> Self {
        let remaining = ledger.remaining(params.budget);
        let remaining_per_day = Ledger::per_day(remaining, params.duration_days);
        let outcome = classify(remaining_per_day, params.daily_spend_target, rule);

        Self {
            budget: params.budget,
            total_spent: ledger.total_spent(),
            remaining,
            remaining_per_day,
            daily_spend_target: params.daily_spend_target,
            duration_days: params.duration_days,
            outcome,
        }
    }
}

/// Classify a per-day allowance against the configured rule
pub fn classify(remaining_per_day: Money, daily_target: Money, rule: OutcomeRule) -> Outcome {
    let on_budget = match rule {
        OutcomeRule::DailyTarget => remaining_per_day >= daily_target,
        OutcomeRule::Positive => remaining_per_day.is_positive(),
    };
    if on_budget {
        Outcome::OnBudget
    } else {
        Outcome::OverBudget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};

    fn ledger_with(cents: &[(i64, Category)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (i, (amount, category)) in cents.iter().enumerate() {
            ledger.accumulate(Expense::new(
                format!("item {}", i),
                Money::from_cents(*amount),
                *category,
            ));
        }
        ledger
    }

    #[test]
    fn test_hotel_scenario() {
        let params = SessionParameters::new(Money::from_cents(100_000), 5, Money::from_cents(10_000));
        let ledger = ledger_with(&[(40_000, Category::Accommodation)]);

        let summary = BudgetSummary::compute(&params, &ledger, OutcomeRule::DailyTarget);
        assert_eq!(summary.remaining.cents(), 60_000);
        assert_eq!(summary.remaining_per_day.cents(), 12_000);
        assert_eq!(summary.total_spent.cents(), 40_000);
        assert_eq!(summary.outcome, Outcome::OnBudget);
    }

    #[test]
    fn test_overspent_is_over_budget_under_both_rules() {
        let params = SessionParameters::new(Money::from_cents(10_000), 3, Money::from_cents(1_000));
        let ledger = ledger_with(&[(15_000, Category::Miscellaneous)]);

        for rule in [OutcomeRule::DailyTarget, OutcomeRule::Positive] {
            let summary = BudgetSummary::compute(&params, &ledger, rule);
            assert_eq!(summary.remaining.cents(), -5_000);
            assert_eq!(summary.outcome, Outcome::OverBudget);
        }
    }

    #[test]
    fn test_rules_disagree_below_target() {
        let per_day = Money::from_cents(5_000);
        let target = Money::from_cents(8_000);

        assert_eq!(classify(per_day, target, OutcomeRule::DailyTarget), Outcome::OverBudget);
        assert_eq!(classify(per_day, target, OutcomeRule::Positive), Outcome::OnBudget);
    }

    #[test]
    fn test_boundaries() {
        let target = Money::from_cents(8_000);
        assert!(classify(target, target, OutcomeRule::DailyTarget).is_on_budget());
        assert!(!classify(Money::zero(), target, OutcomeRule::Positive).is_on_budget());
    }
}
