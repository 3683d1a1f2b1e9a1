//! Trip parameter step
//!
//! Collects the budget, trip length and daily spending target, shows them for
//! review and starts over from the budget question if they are rejected.

use std::io::{BufRead, Write};

use tracing::info;

use crate::display::format_parameters;
use crate::error::TripResult;
use crate::models::{Money, SessionParameters};
use crate::prompt::Prompter;

const AMOUNT_ERROR: &str =
    "Invalid input - please enter a number greater than 0 in the following format: 1000.00";
const DAYS_ERROR: &str = "Invalid input - please enter a whole number of days greater than 0.";

/// Trip parameter step
pub struct ParameterStep;

impl ParameterStep {
    /// Run the step until the user confirms a set of parameters
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        symbol: &str,
    ) -> TripResult<SessionParameters> {
        loop {
            prompter.heading("Trip details")?;

            let budget = prompter.read_amount(
                &format!("What is your travel budget? {}", symbol),
                Money::zero(),
                AMOUNT_ERROR,
            )?;
            let duration_days =
                prompter.read_whole_number("How many days will you be travelling? ", 0, DAYS_ERROR)?;
            let daily_spend_target = prompter.read_amount(
                &format!("How much would you like to spend per day? {}", symbol),
                Money::zero(),
                AMOUNT_ERROR,
            )?;

            let params = SessionParameters::new(budget, duration_days, daily_spend_target);

            prompter.blank()?;
            prompter.line(format_parameters(&params, symbol))?;
            prompter.blank()?;

            if prompter.confirm("Are these details correct? (Y/N) ")? {
                info!(
                    budget = budget.cents(),
                    duration_days,
                    daily_spend_target = daily_spend_target.cents(),
                    "Trip parameters confirmed"
                );
                return Ok(params);
            }

            info!("Trip parameters rejected, starting over");
            prompter.line("No problem, let's start again.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_step(input: &str) -> (TripResult<SessionParameters>, String) {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(input.as_bytes(), &mut output);
            ParameterStep::run(&mut prompter, "£")
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirmed_parameters() {
        let (result, output) = run_step("1000.00\n5\n100.00\ny\n");

        let params = result.unwrap();
        assert_eq!(params.budget.cents(), 100_000);
        assert_eq!(params.duration_days, 5);
        assert_eq!(params.daily_spend_target.cents(), 10_000);
        assert!(output.contains("Travel budget:       £1,000.00"));
    }

    #[test]
    fn test_rejection_discards_all_values() {
        let (result, output) = run_step("500\n3\n50\nn\n1000\n5\n100\ny\n");

        let params = result.unwrap();
        assert_eq!(
            params,
            SessionParameters::new(Money::from_cents(100_000), 5, Money::from_cents(10_000))
        );
        assert_eq!(output.matches("What is your travel budget?").count(), 2);
        assert_eq!(output.matches("How many days will you be travelling?").count(), 2);
        assert!(output.contains("let's start again"));
    }

    #[test]
    fn test_unclear_confirmation_keeps_values() {
        let (result, output) = run_step("1000\n5\n100\nmaybe\ny\n");

        assert_eq!(result.unwrap().budget.cents(), 100_000);
        assert_eq!(output.matches("What is your travel budget?").count(), 1);
        assert_eq!(output.matches("Are these details correct?").count(), 2);
    }

    #[test]
    fn test_invalid_values_are_reasked() {
        let (result, output) = run_step("abc\n-5\n1e5\n800\nabc\n-5\n10\n0\n80\ny\n");

        let params = result.unwrap();
        assert_eq!(params.budget.cents(), 80_000);
        assert_eq!(params.duration_days, 10);
        assert_eq!(params.daily_spend_target.cents(), 8_000);
        assert_eq!(output.matches(AMOUNT_ERROR).count(), 4);
        assert_eq!(output.matches(DAYS_ERROR).count(), 2);
    }
}
