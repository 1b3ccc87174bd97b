//! Number, currency and date formatting for display.
//!
//! Rounding is half away from zero, matching how scores and rewards are
//! shown to staff.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with `,` thousands separators and exactly `dp` decimals.
#[must_use]
pub fn format_number(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let mut magnitude = rounded.abs();
    magnitude.rescale(dp);

    let text = magnitude.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a yen amount, e.g. `¥1,234,567` or `-¥500`.
#[must_use]
pub fn format_yen(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let body = format_number(rounded.abs(), 0);
    if rounded < Decimal::ZERO {
        format!("-¥{body}")
    } else {
        format!("¥{body}")
    }
}

/// Formats a percentage, e.g. `85.50%`.
#[must_use]
pub fn format_percent(value: Decimal, dp: u32) -> String {
    format!("{}%", format_number(value, dp))
}

/// Japanese long date, e.g. `2020年4月1日`.
#[must_use]
pub fn format_date_ja(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), 0, "0")]
    #[case(dec!(999), 0, "999")]
    #[case(dec!(1000), 0, "1,000")]
    #[case(dec!(1234567), 0, "1,234,567")]
    #[case(dec!(1234567.891), 2, "1,234,567.89")]
    #[case(dec!(85), 2, "85.00")]
    #[case(dec!(2.5), 0, "3")]
    #[case(dec!(-2.5), 0, "-3")]
    #[case(dec!(-1234.5), 1, "-1,234.5")]
    #[case(dec!(-0.001), 2, "0.00")]
    fn test_format_number(#[case] value: Decimal, #[case] dp: u32, #[case] expected: &str) {
        assert_eq!(format_number(value, dp), expected);
    }

    #[rstest]
    #[case(dec!(100000), "¥100,000")]
    #[case(dec!(0), "¥0")]
    #[case(dec!(1999.5), "¥2,000")]
    #[case(dec!(-500), "-¥500")]
    fn test_format_yen(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_yen(value), expected);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(85.5), 2), "85.50%");
        assert_eq!(format_percent(dec!(100), 0), "100%");
    }

    #[test]
    fn test_format_date_ja() {
        let date = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        assert_eq!(format_date_ja(date), "2020年4月1日");
    }
}
