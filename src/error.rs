//! Custom error types for the trip budget planner
//!
//! Session-level failures live in [`TripError`]. Rejected answers typed at a
//! prompt are a separate [`InputError`]: they are shown to the user and the
//! prompt is asked again, so they never leave the input reader.

use thiserror::Error;

/// The main error type for trip budget operations
#[derive(Error, Debug)]
pub enum TripError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The trip document could not be updated
    #[error("Document mirror error: {0}")]
    Mirror(String),

    /// Standard input closed before the session finished
    #[error("Input closed before the session was complete")]
    InputClosed,
}

impl TripError {
    /// Check if this error was caused by the input stream ending
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for TripError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TripError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for trip budget operations
pub type TripResult<T> = Result<T, TripError>;

/// Reasons a typed answer was rejected by a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("answer is empty")]
    Empty,

    #[error("'{0}' is not a plain number")]
    NotANumber(String),

    #[error("value must be greater than {0}")]
    TooSmall(String),

    #[error("value must be at most {0}")]
    TooLarge(String),

    #[error("answer is not valid UTF-8 text")]
    NotText,

    #[error("text cannot consist only of digits")]
    NumericOnly,

    #[error("selection {0} is out of range")]
    OutOfRange(String),

    #[error("'{0}' is not Y or N")]
    NotYesNo(String),
}
