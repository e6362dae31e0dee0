//! Vietnamese-format numeric parsing and display formatting.
//!
//! Documents and form inputs write amounts as `1.234.567` or `1.234.567,89`
//! (`.` groups thousands, `,` marks decimals) with optional currency unit
//! tokens. Parsers here are total: anything unparsable collapses to zero.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::{Money, Rate};

/// Currency unit tokens stripped before parsing. Longest first so that
/// `vnđ` is removed before the bare `đ` inside it.
const CURRENCY_TOKENS: [&str; 4] = ["vnđ", "VND", "đ", "₫"];

static DECIMAL_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Parse a locale-formatted currency string into an amount.
///
/// If both `.` and `,` appear, `.` is the thousands separator and `,` the
/// decimal mark; a lone `,` is a decimal mark; otherwise every `.` is a
/// thousands separator.
pub fn parse_amount(raw: &str) -> Money {
    let mut s = raw.trim().to_string();
    if s.contains(',') {
        s = s.replace('.', "").replace(',', ".");
    } else {
        s = s.replace('.', "");
    }
    for token in CURRENCY_TOKENS {
        s = s.replace(token, "");
    }
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Parse a percentage string, accepting both `8,5` and `8.5`. Returns the
/// percent figure itself (8.5), not a fraction.
pub fn parse_percent(raw: &str) -> Rate {
    let normalized = raw.replace(',', ".");
    DECIMAL_TOKEN
        .find(&normalized)
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Format an amount in whole currency units with `.` thousands groups:
/// `1.234.567`.
pub fn format_amount(amount: Money) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format an amount with two decimals, `,` decimal mark and `.` thousands
/// groups: `1.234.567,89`. Display-facing; trailing zeros do not round-trip.
pub fn format_amount_precise(amount: Money) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_thousands(int_part);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped},{frac_part}")
    } else {
        format!("{grouped},{frac_part}")
    }
}

/// Format a percentage with two decimals and a `,` decimal mark: `8,50`.
pub fn format_percent(rate_pct: Rate) -> String {
    format!("{:.2}", rate_pct).replace('.', ",")
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}
