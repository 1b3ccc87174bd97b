//! Evaluation error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::period::PeriodError;

/// Errors that can occur while scoring or ranking evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Rubric has no categories or its weights sum to zero.
    #[error("Rubric must contain at least one category with positive weight")]
    EmptyRubric,

    /// A rubric category is malformed.
    #[error("Invalid rubric category {key}: {reason}")]
    InvalidCategory {
        /// Category key.
        key: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A score references a category not in the rubric.
    #[error("Unknown rubric category: {0}")]
    UnknownCategory(String),

    /// A category was scored more than once.
    #[error("Category scored more than once: {0}")]
    DuplicateScore(String),

    /// A rubric category has no score.
    #[error("Missing score for category: {0}")]
    MissingScore(String),

    /// Score outside `0..=max_score`.
    #[error("Score {score} for {key} is outside 0..={max}")]
    ScoreOutOfRange {
        /// Category key.
        key: String,
        /// Submitted score.
        score: Decimal,
        /// Category maximum.
        max: Decimal,
    },

    /// The same month was scored twice in a roll-up.
    #[error("Month {year}-{month:02} scored more than once")]
    DuplicateMonth {
        /// Calendar year.
        year: i32,
        /// Calendar month.
        month: u32,
    },

    /// A roll-up entry names a month outside 1-12.
    #[error("Month {year}-{month:02} is not a calendar month")]
    InvalidMonth {
        /// Calendar year.
        year: i32,
        /// Submitted month.
        month: u32,
    },

    /// Score arithmetic exceeded the decimal range.
    #[error("Score arithmetic overflowed")]
    Overflow,

    /// Reward table is unusable.
    #[error("Invalid rank table: {0}")]
    InvalidRankTable(String),

    /// Underlying period calculation failed.
    #[error(transparent)]
    Period(#[from] PeriodError),
}
