//! Display formatting shared by every dashboard view

use chrono::{DateTime, Utc};

/// Placeholder shown for metrics the API did not compute
pub const NOT_AVAILABLE: &str = "N/A";

/// Format an integer with en-US thousands grouping
///
/// `1234567` becomes `"1,234,567"`.
#[must_use]
pub fn format_number(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Format a signed integer with en-US thousands grouping
#[must_use]
pub fn format_signed(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Round to the nearest integer and format with grouping
///
/// Non-finite input renders as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_rounded(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    // `as` saturates at the i64 bounds
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    format_signed(rounded)
}

/// Format a ratio as a percentage with two decimals
///
/// `0.1234` becomes `"12.34%"`. A value exactly halfway between two hundredths
/// rounds up, so `0.00125` becomes `"0.13%"`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let percent = ratio * 100.0;
    let hundredths = percent * 100.0;

    // `{:.2}` breaks exact ties to even; only exact products can be ties
    if hundredths.fract().abs() == 0.5 && percent.mul_add(100.0, -hundredths) == 0.0 {
        return format!("{:.2}%", (hundredths + 0.5) / 100.0);
    }
    format!("{percent:.2}%")
}

/// Format a publish timestamp, e.g. `"Mar 15, 2024"`
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Apply `format` to a present value, or render [`NOT_AVAILABLE`]
#[must_use]
pub fn display_or_na<T, F>(value: Option<T>, format: F) -> String
where
    F: FnOnce(T) -> String,
{
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
