//! "Today" and the calendar operations that default to it.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use super::calculator::PeriodCalculator;
use super::error::PeriodError;
use super::types::{PeriodBounds, PeriodInfo};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock read in a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock reporting dates in `tz`.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Configured time zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Period calculator whose optional arguments default to "today".
#[derive(Debug, Clone)]
pub struct PeriodCalendar<C = SystemClock> {
    clock: C,
}

impl<C: Clock> PeriodCalendar<C> {
    /// Creates a calendar driven by `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Today according to the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Resolves the period of `target`, or of today when `target` is `None`.
    pub fn current_period(
        &self,
        founding: NaiveDate,
        target: Option<NaiveDate>,
    ) -> Result<PeriodInfo, PeriodError> {
        let target = target.unwrap_or_else(|| self.today());
        PeriodCalculator::resolve_current_period(founding, target)
    }

    /// Bounds of periods `1..=max_periods`; `None` means up to today's period.
    pub fn periods(
        &self,
        founding: NaiveDate,
        max_periods: Option<i32>,
    ) -> Result<Vec<PeriodBounds>, PeriodError> {
        let max_periods = match max_periods {
            Some(n) => n,
            None => self.current_period(founding, None)?.period_number,
        };
        PeriodCalculator::enumerate_periods(founding, max_periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_period_defaults_to_today() {
        let calendar = PeriodCalendar::new(FixedClock(date(2022, 5, 10)));
        let info = calendar.current_period(date(2020, 4, 1), None).unwrap();
        assert_eq!(info.period_number, 3);
        assert_eq!(info.current_month, 2);
        assert_eq!(info.quarter_number, 1);
    }

    #[test]
    fn test_explicit_target_wins_over_clock() {
        let calendar = PeriodCalendar::new(FixedClock(date(2030, 1, 1)));
        let info = calendar
            .current_period(date(2020, 4, 1), Some(date(2020, 7, 15)))
            .unwrap();
        assert_eq!(info.period_number, 1);
    }

    #[test]
    fn test_periods_default_to_current() {
        let calendar = PeriodCalendar::new(FixedClock(date(2022, 3, 31)));
        let periods = calendar.periods(date(2020, 4, 1), None).unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[1].end_date, date(2022, 3, 31));
    }

    #[test]
    fn test_periods_before_founding_is_rejected() {
        let calendar = PeriodCalendar::new(FixedClock(date(2019, 12, 31)));
        assert!(matches!(
            calendar.periods(date(2020, 4, 1), None),
            Err(PeriodError::PreFoundingDate { .. })
        ));
    }

    #[test]
    fn test_shared_clock_delegates() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(date(2024, 2, 29)));
        let calendar = PeriodCalendar::new(clock);
        assert_eq!(calendar.today(), date(2024, 2, 29));
    }

    #[test]
    fn test_system_clock_uses_timezone() {
        let clock = SystemClock::new(chrono_tz::Asia::Tokyo);
        assert_eq!(clock.timezone(), chrono_tz::Asia::Tokyo);

        let expected = Utc::now().with_timezone(&chrono_tz::Asia::Tokyo).date_naive();
        let today = clock.today();
        // midnight may pass between the two reads
        assert!(today == expected || today.pred_opt() == Some(expected));
    }

    #[test]
    fn test_noon_anchor_survives_zone_shift() {
        let anchored = PeriodCalculator::anchor(date(2021, 3, 31));
        for tz in [chrono_tz::Asia::Tokyo, chrono_tz::America::New_York, chrono_tz::UTC] {
            let local = tz.from_local_datetime(&anchored).single().unwrap();
            assert_eq!(local.with_timezone(&Utc).date_naive(), date(2021, 3, 31));
        }
    }
}
