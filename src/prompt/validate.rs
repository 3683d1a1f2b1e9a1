//! Answer validation for interactive prompts
//!
//! Each function takes an already-trimmed answer and either produces a typed
//! value or explains why the answer was rejected.

use crate::error::InputError;
use crate::models::Money;

/// Largest amount a single answer may hold (one trillion)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000_000);

/// Accept a plain decimal amount strictly greater than `min` and at most [`MAX_AMOUNT`]
pub fn parse_amount(raw: &str, min: Money) -> Result<Money, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }
    let amount = Money::parse(raw).map_err(|_| InputError::NotANumber(raw.to_string()))?;
    if amount <= min {
        return Err(InputError::TooSmall(min.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(InputError::TooLarge(MAX_AMOUNT.to_string()));
    }
    Ok(amount)
}

/// Accept a whole number made only of digits, strictly greater than `min`
pub fn parse_whole_number(raw: &str, min: u32) -> Result<u32, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber(raw.to_string()));
    }
    let value: u32 = raw
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    if value <= min {
        return Err(InputError::TooSmall(min.to_string()));
    }
    Ok(value)
}

/// Accept free text that is neither empty nor made only of digits
pub fn parse_description(raw: &str) -> Result<String, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NumericOnly);
    }
    Ok(raw.to_string())
}

/// Accept a 1-based menu number within `1..=count`
pub fn parse_selection(raw: &str, count: usize) -> Result<usize, InputError> {
    let number = parse_whole_number(raw, 0).map_err(|err| match err {
        InputError::TooSmall(_) => InputError::OutOfRange(raw.to_string()),
        other => other,
    })?;
    let number = number as usize;
    if number > count {
        return Err(InputError::OutOfRange(raw.to_string()));
    }
    Ok(number)
}

/// Accept `y` or `n` in either case
pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.to_ascii_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(InputError::NotYesNo(raw.to_string())),
    }
}
