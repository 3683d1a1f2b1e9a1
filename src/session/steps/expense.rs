//! Expense step
//!
//! Collects one expense, shows it for review and starts over from the
//! description if it is rejected. Nothing reaches the ledger until the
//! expense is confirmed.

use std::io::{BufRead, Write};

use tracing::info;

use crate::display::format_expense;
use crate::error::TripResult;
use crate::models::{Category, Expense, Money};
use crate::prompt::Prompter;

const DESCRIPTION_ERROR: &str =
    "Invalid input - please enter a description. It cannot be empty or only numbers.";
const COST_ERROR: &str =
    "Invalid input - please enter a cost greater than 0 in the following format: 100.00";

/// Expense step
pub struct ExpenseStep;

impl ExpenseStep {
    /// Run the step until the user confirms an expense
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        symbol: &str,
    ) -> TripResult<Expense> {
        let category_error = format!(
            "Invalid input - please enter a number between 1 and {}.",
            Category::ALL.len()
        );
        let category_prompt = format!("Select a category (1-{}): ", Category::ALL.len());

        loop {
            prompter.heading("New expense")?;

            let description = prompter.read_text("What is the expense? ", DESCRIPTION_ERROR)?;
            let cost = prompter.read_amount(
                &format!("How much does it cost? {}", symbol),
                Money::zero(),
                COST_ERROR,
            )?;

            prompter.line("Which category does it belong to?")?;
            let category = prompter.read_choice(&category_prompt, &Category::ALL, &category_error)?;

            let expense = Expense::new(description, cost, category);

            prompter.blank()?;
            prompter.line(format_expense(&expense, symbol))?;
            prompter.blank()?;

            if prompter.confirm("Is this expense correct? (Y/N) ")? {
                info!(category = %expense.category, cost = expense.cost.cents(), "Expense confirmed");
                return Ok(expense);
            }

            info!("Expense rejected, starting over");
            prompter.line("Expense discarded, let's try that again.")?;
        }
    }
}
