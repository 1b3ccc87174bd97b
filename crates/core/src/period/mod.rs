//! Fiscal period calendar.
//!
//! A company's fiscal clock starts in its founding month. This module maps
//! dates onto periods (fiscal years numbered from 1), months-within-period
//! and quarters, and enumerates period boundaries.

pub mod calculator;
pub mod clock;
pub mod error;
pub mod labels;
pub mod types;


pub use calculator::{
    MONTHS_PER_PERIOD, MONTHS_PER_QUARTER, PeriodCalculator, QUARTERS_PER_PERIOD,
};
pub use clock::{Clock, FixedClock, PeriodCalendar, SystemClock};
pub use error::PeriodError;
pub use types::{MonthEntry, PeriodBounds, PeriodInfo, QuarterGroup};
