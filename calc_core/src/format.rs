//! # Rounding and Display Formatting
//!
//! Results carry numbers already rounded to a fixed precision:
//!
//! | Kind                                   | Decimals |
//! |----------------------------------------|----------|
//! | Currency, health figures, geometry     | 2        |
//! | Ratios, slopes, roots, solved sides    | 4        |
//!
//! Formatting helpers here are used by presentation adapters; they apply
//! the [`Currency`] side-band selection but never change a value.

use crate::units::Currency;

/// Decimal places for money and health outputs
pub const CURRENCY_DECIMALS: u32 = 2;

/// Decimal places for ratios, slopes and roots
pub const RATIO_DECIMALS: u32 = 4;

/// Round half away from zero to `decimals` places.
///
/// Negative zero is normalized to `0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // too large to carry a fractional part
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to [`CURRENCY_DECIMALS`]
pub fn round_currency(value: f64) -> f64 {
    round_to(value, CURRENCY_DECIMALS)
}

/// Round to [`RATIO_DECIMALS`]
pub fn round_ratio(value: f64) -> f64 {
    round_to(value, RATIO_DECIMALS)
}

/// Group integer digits with commas: `1234567` → `"1,234,567"`.
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

/// Format an amount with the currency symbol and thousands separators.
///
/// ```rust
/// use calc_core::format::format_currency;
/// use calc_core::units::Currency;
///
/// assert_eq!(format_currency(11322.74, Currency::Usd), "$11,322.74");
/// assert_eq!(format_currency(-5.0, Currency::Eur), "-€5.00");
/// assert_eq!(format_currency(1500.4, Currency::Jpy), "¥1,500");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let decimals = currency.display_decimals();
    let formatted = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let sign = if amount < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}{}{}.{}", sign, currency.symbol(), group_thousands(int_part), frac),
        None => format!("{}{}{}", sign, currency.symbol(), group_thousands(int_part)),
    }
}

/// Format a number without trailing zeros (`4.0` → `"4"`, `2.50` → `"2.5"`).
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.10}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format a duration in seconds as `m:ss` or `h:mm:ss`.
pub fn format_clock(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
