//! Accounting-style number formatting for dashboard tables.
//!
//! Negative amounts are parenthesized rather than signed, near-zero
//! amounts collapse to a dash, and column markup keeps the right edge
//! aligned whether or not a value is parenthesized.

use std::str::FromStr;

/// Magnitudes at or below this threshold display as a dash instead of
/// "0.00". The epsilon absorbs float rounding noise from upstream sums.
pub const NEAR_ZERO: f64 = 0.0005;

/// Format an amount in accounting style.
///
/// - `None`, `NaN`, or infinite input yields an empty string ("no display
///   value", not an error)
/// - magnitudes at or below [`NEAR_ZERO`] yield `-`
/// - everything else is formatted with two fraction digits and comma
///   thousands grouping, wrapped in parentheses when negative
///
/// Negative zero is not negative (`-0.0 < 0.0` is false) and is never
/// parenthesized.
pub fn fmt_acct_num(value: Option<f64>) -> String {
    let Some(num) = value else {
        return String::new();
    };
    if !num.is_finite() {
        return String::new();
    }

    let abs = num.abs();
    if abs <= NEAR_ZERO {
        return "-".to_string();
    }

    let formatted = two_decimal_grouped(abs);
    if num < 0.0 {
        format!("({formatted})")
    } else {
        formatted
    }
}

/// String-typed front door for [`fmt_acct_num`].
///
/// The dashboard feeds cell text straight from table data, so the input
/// may be absent, blank, or not a number at all; those all degrade to an
/// empty string.
pub fn fmt_acct_num_str(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return String::new();
    };
    match f64::from_str(raw.trim()) {
        Ok(num) => fmt_acct_num(Some(num)),
        Err(_) => String::new(),
    }
}

/// Format an amount as a right-justified column fragment with an optional
/// currency symbol pinned to the left edge.
///
/// The right padding marker is a `&nbsp;` normally but empty when the
/// amount ends in `)`, so parenthesized negatives line up with positive
/// values above and below them. Passing `None` or a plain space as the
/// currency character produces a single right-aligned span with no
/// currency column.
pub fn fmt_rj_column(value: Option<f64>, currency_char: Option<char>) -> String {
    let actual = fmt_acct_num(value);
    let right_char = if actual.ends_with(')') { "" } else { "&nbsp;" };

    let mut result = String::new();
    result.push_str(r#"<span style="display: flex; justify-content: space-between; width:100%;">"#);
    match currency_char {
        None | Some(' ') => {
            result.push_str(&format!(
                r#"<span style="text-align: right; flex:1;">{actual}{right_char}</span>"#
            ));
        }
        Some(symbol) => {
            // The dash placeholder gets a blank currency column so the
            // symbol only appears next to real amounts.
            let currency_text = if actual == "-" {
                "&nbsp;".to_string()
            } else {
                format!("&nbsp;{symbol}")
            };
            result.push_str(&format!(
                r#"<span style="text-align: left;">{currency_text}</span>"#
            ));
            result.push_str(&format!(
                r#"<span style="text-align: right; flex:1;">{actual}{right_char}</span>"#
            ));
        }
    }
    result.push_str("</span>");
    result
}

/// Format a non-negative value with two fraction digits and comma
/// thousands separators. Rounding happens at the cent level so carries
/// propagate into the integer part (0.999 -> "1.00").
fn two_decimal_grouped(abs: f64) -> String {
    let cents_total = (abs * 100.0).round() as i64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    // Add thousands separators
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{grouped}.{cents:02}")
}
