//! US-locale currency display for integer cent amounts.
//!
//! Conversion from cents to dollars is exact decimal arithmetic via
//! [`rust_decimal::Decimal`] — never floating point, never truncating
//! integer division.

use rust_decimal::Decimal;

/// Exact dollar value of a cent amount, at scale 2.
/// `65000` becomes `650.00`; trailing zeros are kept.
pub fn dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Format a cent amount as US currency: dollar sign, comma thousands
/// separators, exactly two decimal places. `65000` becomes `$650.00`,
/// `173000` becomes `$1,730.00`.
pub fn format_usd(cents: i64) -> String {
    let dollars = dollars(cents);
    let sign = if dollars.is_sign_negative() { "-" } else { "" };
    let text = dollars.abs().to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Insert comma separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
