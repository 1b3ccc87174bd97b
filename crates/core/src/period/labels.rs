//! Japanese display labels for periods, quarters and months.
//!
//! Kept apart from the arithmetic so the calculator itself stays
//! locale-agnostic.

use chrono::{Datelike, NaiveDate};

/// Period name, e.g. `第3期`.
#[must_use]
pub fn period_name(period_number: i32) -> String {
    format!("第{period_number}期")
}

/// Quarter name, e.g. `第2四半期`.
#[must_use]
pub fn quarter_name(quarter_number: u32) -> String {
    format!("第{quarter_number}四半期")
}

/// Month label, e.g. `2020年4月`.
#[must_use]
pub fn month_label(year: i32, month: u32) -> String {
    format!("{year}年{month}月")
}

/// Month range of a period, e.g. `2020年4月〜2021年3月`.
#[must_use]
pub fn period_range_label(start_date: NaiveDate, end_date: NaiveDate) -> String {
    format!(
        "{}〜{}",
        month_label(start_date.year(), start_date.month()),
        month_label(end_date.year(), end_date.month())
    )
}
