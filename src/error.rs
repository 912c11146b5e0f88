//! Error types for the overtime engine.
//!
//! The calculation functions themselves are total and never fail. Errors only
//! arise while loading configuration, converting requests, and validating
//! caller input before it reaches the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the overtime engine.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/overtime.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/overtime.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// No rate schedule applies to the worker on the given date.
    #[error("Rate schedule not found for worker '{worker_id}' on date {date}")]
    RateNotFound {
        /// The worker whose rates were requested.
        worker_id: String,
        /// The date for which the rates were requested.
        date: NaiveDate,
    },

    /// A time entry was malformed (e.g. neither hours nor clock times supplied).
    #[error("Invalid time entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the invalid entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A time entry carried negative hours.
    #[error("Time entry '{entry_id}' has negative hours: {hours}")]
    NegativeHours {
        /// The ID of the offending entry.
        entry_id: String,
        /// The negative hour value.
        hours: Decimal,
    },

    /// A worker's total for one day exceeded the plausibility bound.
    #[error("Daily total of {hours} hours on {date} exceeds the {limit} hour limit")]
    DailyHoursExceeded {
        /// The day that exceeded the limit.
        date: NaiveDate,
        /// The day's total raw hours.
        hours: Decimal,
        /// The configured limit.
        limit: Decimal,
    },

    /// Job entries for a day do not sum to the day total being allocated.
    #[error("Job entries on {date} sum to {actual} hours, expected {expected}")]
    AllocationMismatch {
        /// The day being allocated.
        date: NaiveDate,
        /// The independently supplied day total.
        expected: Decimal,
        /// The sum of the submitted job entries.
        actual: Decimal,
    },

    /// Entries from more than one worker were passed to a single-worker calculation.
    ///
    /// Raised by direct library callers of `validate_entries`; the API stamps
    /// the request's worker id on every entry it converts.
    #[error("Expected entries for worker '{expected}' only, found '{found}'")]
    MixedWorkers {
        /// The worker the calculation is for.
        expected: String,
        /// The unexpected worker ID.
        found: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
