//! Fiscal period arithmetic.
//!
//! A period is a company-specific fiscal year: twelve calendar months
//! starting on the first day of the founding month. Only the founding
//! year and month matter; the founding day is ignored.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::error::PeriodError;
use super::labels;
use super::types::{MonthEntry, PeriodBounds, PeriodInfo, QuarterGroup};

/// Months in one fiscal period.
pub const MONTHS_PER_PERIOD: u32 = 12;

/// Months in one quarter.
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Quarters in one fiscal period.
pub const QUARTERS_PER_PERIOD: u32 = MONTHS_PER_PERIOD / MONTHS_PER_QUARTER;

/// Hour of day used when a calendar date has to become an instant.
pub const ANCHOR_HOUR: i64 = 12;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Stateless fiscal period calculator.
pub struct PeriodCalculator;

impl PeriodCalculator {
    /// Parses `YYYY-MM-DD` or `YYYY/MM/DD` into a calendar date.
    pub fn parse_date(input: &str) -> Result<NaiveDate, PeriodError> {
        let trimmed = input.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| PeriodError::InvalidArgument(format!("malformed date: {input:?}")))
    }

    /// Pins a calendar date to noon.
    ///
    /// Noon keeps the calendar day stable when the value is later shifted
    /// into any time zone within twelve hours of the caller's.
    #[must_use]
    pub fn anchor(date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + TimeDelta::hours(ANCHOR_HOUR)
    }

    /// Quarter (1-4) of a 1-based month offset within a period.
    ///
    /// Month 0 is treated as month 1.
    #[must_use]
    pub const fn quarter_of(month_in_period: u32) -> u32 {
        month_in_period.saturating_sub(1) / MONTHS_PER_QUARTER + 1
    }

    /// Resolves which period, month and quarter `target` falls into.
    ///
    /// Targets in a month before the founding month are rejected with
    /// [`PeriodError::PreFoundingDate`]. A target earlier in the founding
    /// month itself is period 1, month 1.
    pub fn resolve_current_period(
        founding: NaiveDate,
        target: NaiveDate,
    ) -> Result<PeriodInfo, PeriodError> {
        let elapsed = Self::months_between(founding, target);
        let elapsed =
            u32::try_from(elapsed).map_err(|_| PeriodError::PreFoundingDate { founding, target })?;

        let period_number = i32::try_from(elapsed / MONTHS_PER_PERIOD + 1)
            .map_err(|_| PeriodError::out_of_range(target))?;
        let current_month = elapsed % MONTHS_PER_PERIOD + 1;
        let bounds = Self::resolve_period_bounds(founding, period_number)?;

        Ok(PeriodInfo {
            period_number,
            start_date: bounds.start_date,
            end_date: bounds.end_date,
            current_month,
            quarter_number: Self::quarter_of(current_month),
        })
    }

    /// Computes the inclusive start/end dates of period `period_number`.
    pub fn resolve_period_bounds(
        founding: NaiveDate,
        period_number: i32,
    ) -> Result<PeriodBounds, PeriodError> {
        if period_number < 1 {
            return Err(PeriodError::InvalidArgument(format!(
                "period number must be at least 1, got {period_number}"
            )));
        }

        let start_year = founding
            .year()
            .checked_add(period_number - 1)
            .ok_or_else(|| PeriodError::out_of_range(format!("period {period_number}")))?;
        let start_date = NaiveDate::from_ymd_opt(start_year, founding.month(), 1)
            .ok_or_else(|| PeriodError::out_of_range(format!("period {period_number}")))?;
        let end_date = start_date
            .checked_add_months(Months::new(MONTHS_PER_PERIOD))
            .and_then(|next_start| next_start.pred_opt())
            .ok_or_else(|| PeriodError::out_of_range(format!("period {period_number}")))?;

        Ok(PeriodBounds {
            period_number,
            period_name: labels::period_name(period_number),
            start_date,
            end_date,
        })
    }

    /// Lists the twelve months of a period in calendar order.
    pub fn enumerate_months(
        founding: NaiveDate,
        period_number: i32,
    ) -> Result<Vec<MonthEntry>, PeriodError> {
        let bounds = Self::resolve_period_bounds(founding, period_number)?;

        (0..MONTHS_PER_PERIOD)
            .map(|offset| -> Result<MonthEntry, PeriodError> {
                let date = bounds
                    .start_date
                    .checked_add_months(Months::new(offset))
                    .ok_or_else(|| PeriodError::out_of_range(format!("period {period_number}")))?;
                let quarter_number = offset / MONTHS_PER_QUARTER + 1;

                Ok(MonthEntry {
                    year: date.year(),
                    month: date.month(),
                    label: labels::month_label(date.year(), date.month()),
                    quarter_number,
                    quarter_name: labels::quarter_name(quarter_number),
                })
            })
            .collect()
    }

    /// Splits a period's months into its four quarters.
    pub fn group_by_quarter(
        founding: NaiveDate,
        period_number: i32,
    ) -> Result<Vec<QuarterGroup>, PeriodError> {
        let months = Self::enumerate_months(founding, period_number)?;

        Ok((1..=QUARTERS_PER_PERIOD)
            .map(|quarter_number| QuarterGroup {
                quarter_number,
                quarter_name: labels::quarter_name(quarter_number),
                months: months
                    .iter()
                    .filter(|m| m.quarter_number == quarter_number)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    /// Bounds of periods `1..=max_periods`.
    pub fn enumerate_periods(
        founding: NaiveDate,
        max_periods: i32,
    ) -> Result<Vec<PeriodBounds>, PeriodError> {
        if max_periods < 1 {
            return Err(PeriodError::InvalidArgument(format!(
                "max periods must be at least 1, got {max_periods}"
            )));
        }

        (1..=max_periods)
            .map(|period_number| Self::resolve_period_bounds(founding, period_number))
            .collect()
    }

    /// Signed whole months from the founding month to the target month.
    fn months_between(founding: NaiveDate, target: NaiveDate) -> i64 {
        let years = i64::from(target.year()) - i64::from(founding.year());
        let months = i64::from(target.month0()) - i64::from(founding.month0());
        years * 12 + months
    }
}
