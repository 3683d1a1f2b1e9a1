//! Session orchestration
//!
//! Runs the trip parameter step once, then the expense step in a loop until
//! the user stops, and finishes with the budget summary. Ledger updates are
//! made before the matching trip document update, and a failed document
//! update is reported without touching the ledger.

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::{
    format_expense_list, format_parameters, format_summary, format_totals_table, outcome_message,
};
use crate::error::TripResult;
use crate::intro::WELCOME;
use crate::mirror::{render_table, DocumentMirror};
use crate::models::SessionParameters;
use crate::prompt::Prompter;
use crate::services::{BudgetSummary, Ledger};

use super::steps::{ExpenseStep, ParameterStep};

/// Final state of a completed session
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub parameters: SessionParameters,
    pub ledger: Ledger,
    pub summary: BudgetSummary,
}

/// A single interactive planning session
pub struct Session<'m, R, W> {
    prompter: Prompter<R, W>,
    mirror: &'m mut dyn DocumentMirror,
    settings: Settings,
    intro: Option<String>,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    /// Create a session over the given prompter and trip document
    pub fn new(prompter: Prompter<R, W>, mirror: &'m mut dyn DocumentMirror, settings: Settings) -> Self {
        Self {
            prompter,
            mirror,
            settings,
            intro: None,
        }
    }

    /// Text shown verbatim under the welcome banner
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Run the session to completion
    pub fn run(&mut self) -> TripResult<SessionReport> {
        info!("Session started");
        self.welcome()?;
        self.open_document()?;

        let symbol = self.settings.currency_symbol.clone();

        let parameters = ParameterStep::run(&mut self.prompter, &symbol)?;
        self.prompter.blank()?;
        let days = if parameters.duration_days == 1 { "day" } else { "days" };
        self.prompter.success(format!(
            "Your travel budget is {} for {} {}, aiming to spend {} per day.",
            parameters.budget.format_with_symbol(&symbol),
            parameters.duration_days,
            days,
            parameters.daily_spend_target.format_with_symbol(&symbol)
        ))?;
        self.mirror_text(&format!(
            "Trip details\n{}\n",
            format_parameters(&parameters, &symbol)
        ))?;

        let mut ledger = Ledger::new();
        loop {
            let expense = ExpenseStep::run(&mut self.prompter, &symbol)?;
            let line = expense.summary_line(&symbol);
            ledger.accumulate(expense);

            self.prompter.success(format!("Added {}", line))?;
            self.prompter.heading("Spending so far")?;
            self.prompter
                .line(format_totals_table(ledger.totals(), &symbol))?;
            self.mirror_text(&format!(
                "Expense added: {}\n{}\n",
                line,
                render_table(ledger.totals(), &symbol)
            ))?;

            self.prompter.blank()?;
            if !self
                .prompter
                .confirm("Would you like to add another expense? (Y/N) ")?
            {
                break;
            }
        }

        info!(expenses = ledger.count(), "Expense entry finished");
        let summary = BudgetSummary::compute(&parameters, &ledger, self.settings.outcome_rule);
        self.report(&ledger, &summary)?;

        info!(
            remaining = summary.remaining.cents(),
            remaining_per_day = summary.remaining_per_day.cents(),
            outcome = ?summary.outcome,
            "Session finished"
        );

        Ok(SessionReport {
            parameters,
            ledger,
            summary,
        })
    }

    fn welcome(&mut self) -> TripResult<()> {
        self.prompter.heading(WELCOME)?;
        if let Some(intro) = &self.intro {
            self.prompter.blank()?;
            self.prompter.text(intro)?;
            if !intro.ends_with('\n') {
                self.prompter.blank()?;
            }
        }
        Ok(())
    }

    fn open_document(&mut self) -> TripResult<()> {
        if self.settings.mirror.clear_on_start {
            if let Err(e) = self.mirror.clear() {
                warn!(error = %e, "Failed to clear trip document");
                self.prompter
                    .warning(format!("Could not clear the trip document: {}", e))?;
            }
        }
        let header = format!(
            "==== Trip budget session {} ====\n",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        self.mirror_text(&header)
    }

    fn report(&mut self, ledger: &Ledger, summary: &BudgetSummary) -> TripResult<()> {
        let symbol = self.settings.currency_symbol.clone();

        self.prompter.heading("Trip summary")?;
        self.prompter
            .line(format_expense_list(ledger.expenses(), &symbol))?;
        self.prompter.blank()?;
        self.prompter
            .line(format_totals_table(ledger.totals(), &symbol))?;
        self.prompter.blank()?;
        self.prompter.line(format_summary(summary, &symbol))?;
        self.prompter.blank()?;

        let message = outcome_message(summary.outcome);
        if summary.outcome.is_on_budget() {
            self.prompter.success(message)?;
        } else {
            self.prompter.warning(message)?;
        }

        self.mirror_text(&format!(
            "Trip summary\n{}\n\n{}\n\n{}\n{}\n",
            format_expense_list(ledger.expenses(), &symbol),
            render_table(ledger.totals(), &symbol),
            format_summary(summary, &symbol),
            message
        ))
    }

    /// Append to the trip document, reporting but not propagating failures
    fn mirror_text(&mut self, text: &str) -> TripResult<()> {
        if let Err(e) = self.mirror.append(text) {
            warn!(error = %e, "Failed to update trip document");
            self.prompter
                .warning(format!("Could not update the trip document: {}", e))?;
        }
        Ok(())
    }
}
