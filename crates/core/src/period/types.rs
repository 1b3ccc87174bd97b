//! Fiscal period value types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::calculator::PeriodCalculator;

/// Where a target date sits within the company's fiscal calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodInfo {
    /// Ordinal fiscal year since founding, starting at 1.
    pub period_number: i32,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// 1-based month offset of the target date within the period (1-12).
    pub current_month: u32,
    /// Quarter of the target date within the period (1-4).
    pub quarter_number: u32,
}

/// Inclusive date bounds of one fiscal period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// Ordinal fiscal year since founding, starting at 1.
    pub period_number: i32,
    /// Display name (e.g., "第1期").
    pub period_name: String,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PeriodBounds {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Start date pinned to noon.
    #[must_use]
    pub fn start_anchor(&self) -> NaiveDateTime {
        PeriodCalculator::anchor(self.start_date)
    }

    /// End date pinned to noon.
    #[must_use]
    pub fn end_anchor(&self) -> NaiveDateTime {
        PeriodCalculator::anchor(self.end_date)
    }
}

/// One calendar month belonging to a fiscal period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthEntry {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Display label (e.g., "2020年4月").
    pub label: String,
    /// Quarter within the period (1-4).
    pub quarter_number: u32,
    /// Quarter display name (e.g., "第1四半期").
    pub quarter_name: String,
}

/// Three consecutive months forming one quarter of a period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuarterGroup {
    /// Quarter within the period (1-4).
    pub quarter_number: u32,
    /// Quarter display name.
    pub quarter_name: String,
    /// Months of the quarter in calendar order.
    pub months: Vec<MonthEntry>,
}
