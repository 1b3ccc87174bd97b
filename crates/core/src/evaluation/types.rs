//! Evaluation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One weighted category of an evaluation rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricCategory {
    /// Stable key (e.g., "teamwork").
    pub key: String,
    /// Display name.
    pub name: String,
    /// Relative weight; weights need not sum to any particular value.
    pub weight: Decimal,
    /// Highest attainable score in this category.
    pub max_score: Decimal,
}

/// Score given for one rubric category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Key of the scored category.
    pub category_key: String,
    /// Raw score, `0..=max_score`.
    pub score: Decimal,
}

/// Weighted score (0-100) for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyScore {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Weighted score.
    pub score: Decimal,
}

/// Quarter-level roll-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterRollup {
    /// Quarter within the period (1-4).
    pub quarter_number: u32,
    /// Quarter display name.
    pub quarter_name: String,
    /// Average of the scored months, if any.
    pub average: Option<Decimal>,
    /// Number of months with a score.
    pub months_scored: usize,
}

/// Period-level (annual) roll-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRollup {
    /// Period number.
    pub period_number: i32,
    /// Period display name.
    pub period_name: String,
    /// Quarters 1-4 in order.
    pub quarters: Vec<QuarterRollup>,
    /// Average over every scored month in the period.
    pub annual_average: Option<Decimal>,
    /// Number of months with a score.
    pub months_scored: usize,
}

/// One row of the reward table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    /// Rank name (e.g., "A").
    pub rank: String,
    /// Minimum score to reach the rank.
    pub min_score: Decimal,
    /// Reward amount in yen.
    pub reward: Decimal,
}

/// Staff member's score submitted for ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffScore {
    /// Staff identifier.
    pub staff_id: String,
    /// Weighted score.
    pub score: Decimal,
}

/// Staff member's place in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedStaff {
    /// Competition position (1, 2, 2, 4, ...).
    pub position: usize,
    /// Staff identifier.
    pub staff_id: String,
    /// Weighted score.
    pub score: Decimal,
    /// Reward tier reached, if any.
    pub tier: Option<RankTier>,
}
