//! Display formatting for currency and dates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole US dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use employee_dashboard::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(85_000, 0)), "$85,000");
/// assert_eq!(format_currency(Decimal::new(12_345_675, 2)), "$123,457");
/// assert_eq!(format_currency(Decimal::new(-1_500, 0)), "-$1,500");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a date as `Oct 17, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(Decimal::new(0, 0)), "$0");
        assert_eq!(format_currency(Decimal::new(999, 0)), "$999");
        assert_eq!(format_currency(Decimal::new(1_000, 0)), "$1,000");
        assert_eq!(format_currency(Decimal::new(1_234_567, 0)), "$1,234,567");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(Decimal::new(8_499_950, 2)), "$85,000");
        assert_eq!(format_currency(Decimal::new(-25, 1)), "-$3");
        assert_eq!(format_currency(Decimal::new(-4, 1)), "$0");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(format_date(date), "Oct 17, 2026");
        let date = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        assert_eq!(format_date(date), "Jan 6, 2020");
    }
}
