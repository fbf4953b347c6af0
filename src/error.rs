//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a weekly payroll.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Every fallible operation in the crate returns this error type. All variants
/// are recoverable at the input boundary: the caller can re-prompt or substitute
/// a value and try again.
///
/// # Example
///
/// ```
/// use weekly_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidCategory {
///     token: "holiday-ish".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid day category: holiday-ish");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A day category token did not name one of the six categories.
    #[error("Invalid day category: {token}")]
    InvalidCategory {
        /// The token that could not be recognised.
        token: String,
    },

    /// A clock-in/clock-out pair produced an impossible duration.
    #[error("Invalid time range {clock_in} to {clock_out}: {message}")]
    InvalidTimeRange {
        /// The clock-in time as entered.
        clock_in: String,
        /// The clock-out time as entered.
        clock_out: String,
        /// A description of what made the range invalid.
        message: String,
    },

    /// A time string was not a 4-digit 24-hour `HHMM` value.
    #[error("Invalid time format '{input}': expected HHMM between 0000 and 2359")]
    InvalidTimeFormat {
        /// The rejected input.
        input: String,
    },

    /// A week did not consist of days 1 to 7 in order.
    #[error("Invalid week: {message}")]
    InvalidWeek {
        /// A description of what made the week invalid.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
