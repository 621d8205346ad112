//! en-US display formatting for dashboard values.

use chrono::NaiveDate;

/// Group an integer with thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_number(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Whole-dollar currency: `12345.6` -> `"$12,346"`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}${}", sign, group_digits(&digits))
}

/// Two-decimal percentage: `3.456` -> `"3.46%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Short chart label: 2024-01-05 -> `"Jan 5"`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
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
