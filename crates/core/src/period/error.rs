//! Period calculation error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the fiscal period calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// An argument is outside the accepted domain (non-positive period
    /// number, malformed date text, date arithmetic out of range).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target date falls in a month before the company was founded.
    #[error("Date {target} precedes founding month of {founding}")]
    PreFoundingDate {
        /// Company founding date.
        founding: NaiveDate,
        /// Requested target date.
        target: NaiveDate,
    },
}

impl PeriodError {
    pub(crate) fn out_of_range(what: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("{what} is out of the supported date range"))
    }
}
