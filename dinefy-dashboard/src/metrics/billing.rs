//! Usage and purchase arithmetic

use rust_decimal::prelude::*;
use shared::models::UsageRow;

/// Free minutes included with the plan
pub const FREE_MINUTES: u32 = 1000;

/// Dollars per minute (0.05)
pub const RATE_PER_MINUTE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

pub fn total_minutes(rows: &[UsageRow]) -> u32 {
    rows.iter().map(|r| r.minutes).sum()
}

/// `total / allowance × 100`, unclamped; 0 for a zero allowance
pub fn usage_percentage(rows: &[UsageRow], allowance: u32) -> f64 {
    if allowance == 0 {
        return 0.0;
    }
    f64::from(total_minutes(rows)) / f64::from(allowance) * 100.0
}

/// Percentage clamped to `0..=100` for a bounded progress indicator
pub fn usage_progress(percentage: f64) -> f64 {
    percentage.clamp(0.0, 100.0)
}

/// `allowance − total`; negative once usage exceeds the allowance
pub fn remaining_minutes(rows: &[UsageRow], allowance: u32) -> i64 {
    i64::from(allowance) - i64::from(total_minutes(rows))
}

/// Whole minutes a dollar amount buys at `rate`
///
/// The amount is read like a typed number field: leading whitespace is
/// skipped and the longest numeric prefix counts (`"12abc"` is 12, `"1e2"`
/// is 100).
/// Unparseable, empty, negative or zero input buys nothing.
pub fn purchased_minutes(amount_text: &str, rate: Decimal) -> u64 {
    let Some(amount) = parse_amount(amount_text) else {
        return 0;
    };
    if amount <= Decimal::ZERO || rate <= Decimal::ZERO {
        return 0;
    }
    amount
        .checked_div(rate)
        .map(|minutes| minutes.floor())
        .and_then(|minutes| minutes.to_u64())
        .unwrap_or(0)
}

/// Longest leading decimal number in `text`, with an optional `e`/`E` exponent
///
/// An exponent marker without digits after it is not part of the number
/// (`"1e"` is 1). An exponent that overflows the decimal range yields `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    end = skip_digits(bytes, end);
    let int_digits = end - digits_start;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        frac_digits = frac_end - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let mut literal = text[..end].trim_end_matches('.').to_string();
    if int_digits == 0 {
        // ".5" / "-.5"
        literal.insert(digits_start, '0');
    }
    let mantissa = Decimal::from_str(&literal).ok()?;

    match exponent(bytes, end) {
        Some(exp) => scale_by_power_of_ten(mantissa, exp),
        None => Some(mantissa),
    }
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

/// `[eE][+-]?digits` starting at `at`, if present
fn exponent(bytes: &[u8], at: usize) -> Option<i64> {
    if !matches!(bytes.get(at), Some(b'e' | b'E')) {
        return None;
    }
    let mut start = at + 1;
    let negative = bytes.get(start) == Some(&b'-');
    if matches!(bytes.get(start), Some(b'+' | b'-')) {
        start += 1;
    }
    let end = skip_digits(bytes, start);
    if end == start {
        return None;
    }
    let magnitude = bytes[start..end].iter().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn scale_by_power_of_ten(mut value: Decimal, exp: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    for _ in 0..exp.unsigned_abs() {
        value = if exp > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
        if value.is_zero() {
            break;
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(minutes: &[u32]) -> Vec<UsageRow> {
        minutes
            .iter()
            .enumerate()
            .map(|(i, m)| UsageRow {
                date: format!("2024-{:02}", i + 1),
                minutes: *m,
            })
            .collect()
    }

    #[test]
    fn test_usage_over_allowance() {
        let usage = rows(&[120, 145, 180, 160, 200, 220]);
        assert_eq!(total_minutes(&usage), 1025);
        assert_eq!(remaining_minutes(&usage, FREE_MINUTES), -25);
        assert!((usage_percentage(&usage, FREE_MINUTES) - 102.5).abs() < 1e-9);
        assert_eq!(usage_progress(102.5), 100.0);
    }

    #[test]
    fn test_usage_edge_cases() {
        assert_eq!(total_minutes(&[]), 0);
        assert_eq!(usage_percentage(&[], FREE_MINUTES), 0.0);
        assert_eq!(usage_percentage(&rows(&[10]), 0), 0.0);
        assert_eq!(remaining_minutes(&[], FREE_MINUTES), 1000);
        assert_eq!(usage_progress(-3.0), 0.0);
        assert_eq!(usage_progress(42.0), 42.0);
    }

    #[test]
    fn test_purchased_minutes() {
        assert_eq!(purchased_minutes("50", RATE_PER_MINUTE), 1000);
        assert_eq!(purchased_minutes("25.00", RATE_PER_MINUTE), 500);
        assert_eq!(purchased_minutes("0.07", RATE_PER_MINUTE), 1);
        assert_eq!(purchased_minutes("0.04", RATE_PER_MINUTE), 0);
        assert_eq!(purchased_minutes("abc", RATE_PER_MINUTE), 0);
        assert_eq!(purchased_minutes("", RATE_PER_MINUTE), 0);
        assert_eq!(purchased_minutes("-10", RATE_PER_MINUTE), 0);
        assert_eq!(purchased_minutes("10", Decimal::ZERO), 0);
    }

    #[test]
    fn test_purchased_minutes_is_exact() {
        // 0.15 / 0.05 must be exactly 3, not 2.9999…
        assert_eq!(purchased_minutes("0.15", RATE_PER_MINUTE), 3);
        assert_eq!(purchased_minutes("1.1", RATE_PER_MINUTE), 22);
    }

    #[test]
    fn test_parse_amount_prefix() {
        assert_eq!(parse_amount("12abc"), Some(Decimal::from(12)));
        assert_eq!(parse_amount("  7.5 dollars"), Some(Decimal::new(75, 1)));
        assert_eq!(parse_amount(".5"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_amount("-.5"), Some(Decimal::new(-5, 1)));
        assert_eq!(parse_amount("3."), Some(Decimal::from(3)));
        assert_eq!(parse_amount("+4"), Some(Decimal::from(4)));
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("$5"), None);
    }

    #[test]
    fn test_parse_amount_exponent() {
        assert_eq!(parse_amount("1e2"), Some(Decimal::from(100)));
        assert_eq!(parse_amount("2.5E1"), Some(Decimal::from(25)));
        assert_eq!(parse_amount("5e-1"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_amount("3e+1x"), Some(Decimal::from(30)));
        // Marker without digits is left off
        assert_eq!(parse_amount("1e"), Some(Decimal::from(1)));
        assert_eq!(parse_amount("1e-"), Some(Decimal::from(1)));
        assert_eq!(parse_amount("1e400"), None);
        assert_eq!(purchased_minutes("1e-400", RATE_PER_MINUTE), 0);

        assert_eq!(purchased_minutes("1e2", RATE_PER_MINUTE), 2000);
        assert_eq!(purchased_minutes("1e", RATE_PER_MINUTE), 20);
    }
}
