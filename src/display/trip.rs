//! Trip display formatting
//!
//! Formats session parameters, expenses and budget summaries as text blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{CategoryTotals, Expense, SessionParameters};
use crate::services::{BudgetSummary, Outcome};

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Format the parameters shown for review
pub fn format_parameters(params: &SessionParameters, symbol: &str) -> String {
    let days = if params.duration_days == 1 { "day" } else { "days" };

    let mut output = String::new();
    output.push_str(&format!(
        "Travel budget:       {}\n",
        params.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Trip length:         {} {}\n",
        params.duration_days, days
    ));
    output.push_str(&format!(
        "Daily spend target:  {}\n",
        params.daily_spend_target.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Budget per day:      {}",
        params.budget_per_day().format_with_symbol(symbol)
    ));
    output
}

/// Format a single expense for review
pub fn format_expense(expense: &Expense, symbol: &str) -> String {
    format!(
        "Description:  {}\nCost:         {}\nCategory:     {}",
        expense.description,
        expense.cost.format_with_symbol(symbol),
        expense.category
    )
}

/// Format confirmed expenses as a numbered list
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| format!("  {}. {}", i + 1, expense.summary_line(symbol)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format running category totals as a terminal table
pub fn format_totals_table(totals: &CategoryTotals, symbol: &str) -> String {
    let mut rows: Vec<TotalRow> = totals
        .iter()
        .map(|(category, amount)| TotalRow {
            category: category.label(),
            spent: amount.format_with_symbol(symbol),
        })
        .collect();
    rows.push(TotalRow {
        category: "Total",
        spent: totals.sum().format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    table.to_string()
}

/// Format the end-of-session figures
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Travel budget:       {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total spent:         {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining budget:    {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining per day:   {} (over {} days)\n",
        summary.remaining_per_day.format_with_symbol(symbol),
        summary.duration_days
    ));
    output.push_str(&format!(
        "Daily spend target:  {}",
        summary.daily_spend_target.format_with_symbol(symbol)
    ));
    output
}

/// Closing message for the session outcome
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::OnBudget => "You are on budget. Enjoy your trip!",
        Outcome::OverBudget => {
            "You are over budget. Consider cutting back on some expenses before you go."
        }
    }
}
