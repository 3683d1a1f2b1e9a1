//! Interactive prompting
//!
//! [`Prompter`] owns the input and output streams for a session. Every typed
//! reader is built on [`Prompter::prompt_until`], which keeps asking the same
//! question until the answer passes validation. There is no retry limit; the
//! only way out other than a valid answer is the input stream closing.

pub mod validate;

use std::fmt::Display;
use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use tracing::debug;

use crate::error::{InputError, TripError, TripResult};
use crate::models::Money;

/// Message shown when a yes/no question gets any other answer
pub const YES_NO_ERROR: &str = "Please answer Y or N.";

/// Line-based reader/writer used by every step of a session
pub struct Prompter<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create an unstyled prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Enable or disable ANSI styling of messages
    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Write a plain line
    pub fn line(&mut self, text: impl Display) -> TripResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text exactly as given
    pub fn text(&mut self, text: &str) -> TripResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> TripResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Write a section heading
    pub fn heading(&mut self, text: impl Display) -> TripResult<()> {
        let text = text.to_string();
        if self.styled {
            writeln!(self.output, "\n{}", text.bold().cyan())?;
        } else {
            writeln!(self.output, "\n{}", text)?;
        }
        Ok(())
    }

    pub fn success(&mut self, text: impl Display) -> TripResult<()> {
        let text = text.to_string();
        if self.styled {
            writeln!(self.output, "{}", text.green())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    pub fn warning(&mut self, text: impl Display) -> TripResult<()> {
        let text = text.to_string();
        if self.styled {
            writeln!(self.output, "{}", text.yellow())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    pub fn error(&mut self, text: impl Display) -> TripResult<()> {
        let text = text.to_string();
        if self.styled {
            writeln!(self.output, "{}", text.red())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    /// Show a prompt and read one trimmed line of input
    ///
    /// The outer error means the session cannot continue. The inner one is
    /// a line that is not UTF-8 text, which the caller can ask about again.
    pub fn ask(&mut self, prompt: &str) -> TripResult<Result<String, InputError>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        let read = self.input.read_until(b'\n', &mut bytes)?;
        if read == 0 {
            return Err(TripError::InputClosed);
        }

        Ok(String::from_utf8(bytes)
            .map(|line| line.trim().to_string())
            .map_err(|_| InputError::NotText))
    }

    /// Ask `prompt` until `accept` produces a value
    ///
    /// Every rejected answer prints `error_message` and asks again.
    pub fn prompt_until<T, F>(&mut self, prompt: &str, error_message: &str, mut accept: F) -> TripResult<T>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            match self.ask(prompt)?.and_then(|raw| accept(&raw)) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    debug!(prompt, %reason, "Rejected input");
                    self.error(error_message)?;
                }
            }
        }
    }

    /// Read an amount strictly greater than `min`
    pub fn read_amount(&mut self, prompt: &str, min: Money, error_message: &str) -> TripResult<Money> {
        self.prompt_until(prompt, error_message, |raw| validate::parse_amount(raw, min))
    }

    /// Read a whole number strictly greater than `min`
    pub fn read_whole_number(&mut self, prompt: &str, min: u32, error_message: &str) -> TripResult<u32> {
        self.prompt_until(prompt, error_message, |raw| validate::parse_whole_number(raw, min))
    }

    /// Read text that is neither empty nor purely digits
    pub fn read_text(&mut self, prompt: &str, error_message: &str) -> TripResult<String> {
        self.prompt_until(prompt, error_message, validate::parse_description)
    }

    /// List `options` with 1-based numbers and read a choice among them
    pub fn read_choice<T>(&mut self, prompt: &str, options: &[T], error_message: &str) -> TripResult<T>
    where
        T: Copy + Display,
    {
        for (i, option) in options.iter().enumerate() {
            self.line(format!("  {}. {}", i + 1, option))?;
        }
        self.prompt_until(prompt, error_message, |raw| {
            validate::parse_selection(raw, options.len()).map(|number| options[number - 1])
        })
    }

    /// Ask a Y/N question; any other answer repeats the question
    pub fn confirm(&mut self, question: &str) -> TripResult<bool> {
        self.prompt_until(question, YES_NO_ERROR, validate::parse_yes_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn run<T>(input: &str, f: impl FnOnce(&mut Prompter<&[u8], &mut Vec<u8>>) -> TripResult<T>) -> (TripResult<T>, String) {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(input.as_bytes(), &mut output);
            f(&mut prompter)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_duration_rejects_text_and_negative() {
        let (result, output) = run("abc\n-5\n10\n", |p| {
            p.read_whole_number("How many days? ", 0, "Please enter a whole number of days.")
        });

        assert_eq!(result.unwrap(), 10);
        assert_eq!(output.matches("How many days? ").count(), 3);
        assert_eq!(output.matches("Please enter a whole number of days.").count(), 2);
    }

    #[test]
    fn test_confirm_reasks_on_unknown_answer() {
        let (result, output) = run("maybe\ny\n", |p| p.confirm("Is this correct? (Y/N) "));

        assert!(result.unwrap());
        assert_eq!(output.matches("Is this correct? (Y/N) ").count(), 2);
        assert_eq!(output.matches(YES_NO_ERROR).count(), 1);
    }

    #[test]
    fn test_confirm_no_is_case_insensitive() {
        let (result, _) = run("N\n", |p| p.confirm("Continue? "));
        assert!(!result.unwrap());
    }

    #[test]
    fn test_amount_trims_and_rejects_notation() {
        let (result, output) = run("1e5\n  \n 0 \n  250.75  \n", |p| {
            p.read_amount("Cost? ", Money::zero(), "Invalid amount.")
        });

        assert_eq!(result.unwrap().cents(), 25_075);
        assert_eq!(output.matches("Invalid amount.").count(), 3);
    }

    #[test]
    fn test_text_rejects_digits_and_empty() {
        let (result, _) = run("\n42\nhotel\n", |p| p.read_text("Description: ", "Invalid description."));
        assert_eq!(result.unwrap(), "hotel");
    }

    #[test]
    fn test_choice_maps_number_to_position() {
        for (i, expected) in Category::ALL.iter().enumerate() {
            let input = format!("{}\n", i + 1);
            let (result, output) = run(&input, |p| p.read_choice("Category: ", &Category::ALL, "Pick 1-4."));
            assert_eq!(result.unwrap(), *expected);
            assert!(output.contains("  1. Flights/Transport"));
            assert!(output.contains("  4. Miscellaneous"));
        }
    }

    #[test]
    fn test_choice_rejects_out_of_range() {
        let (result, output) = run("0\n5\nx\n3\n", |p| p.read_choice("Category: ", &Category::ALL, "Pick 1-4."));

        assert_eq!(result.unwrap(), Category::Excursions);
        assert_eq!(output.matches("Pick 1-4.").count(), 3);
    }

    #[test]
    fn test_invalid_utf8_line_is_asked_again() {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(&b"\xff\xfe\n10\n"[..], &mut output);
            prompter.read_whole_number("Days? ", 0, "Please enter a whole number of days.")
        };
        let output = String::from_utf8(output).unwrap();

        assert_eq!(result.unwrap(), 10);
        assert_eq!(output.matches("Days? ").count(), 2);
        assert_eq!(output.matches("Please enter a whole number of days.").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_description_is_rejected() {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(&b"caf\xe9\ncafe\n"[..], &mut output);
            prompter.read_text("Description: ", "Invalid description.")
        };
        assert_eq!(result.unwrap(), "cafe");
    }

    #[test]
    fn test_closed_input() {
        let (result, _) = run("abc\n", |p| p.read_whole_number("Days? ", 0, "Nope."));
        assert!(matches!(result, Err(TripError::InputClosed)));
    }

    #[test]
    fn test_unstyled_output_has_no_escape_codes() {
        let (_, output) = run("", |p| {
            p.heading("Summary")?;
            p.warning("Careful")
        });
        assert!(!output.contains('\u{1b}'));
        assert_eq!(output, "\nSummary\nCareful\n");
    }

    #[test]
    fn test_styled_output() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new("".as_bytes(), &mut output).with_style(true);
        prompter.heading("Summary").unwrap();
        drop(prompter);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("Summary"));
    }
}
