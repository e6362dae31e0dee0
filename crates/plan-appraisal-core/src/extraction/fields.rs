//! Field extraction over a normalized plan document.
//!
//! Every rule is an ordered pattern cascade; the first match wins and a rule
//! that matches nothing leaves the field at its default. Extraction is
//! total: it returns a fully populated record for any input, including empty
//! or corrupt bytes, and never raises to its caller.

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::normalize::normalize;
use super::patterns::*;
use crate::locale::{parse_amount, parse_percent};
use crate::types::LoanApplication;

/// Maximum length kept from the purpose-clause fallback capture.
const PURPOSE_CLAUSE_LIMIT: usize = 200;

/// Extract a loan application from a raw byte stream. Invalid UTF-8 is
/// replaced, not rejected.
pub fn extract_from_bytes(bytes: &[u8]) -> LoanApplication {
    extract_application(&String::from_utf8_lossy(bytes))
}

/// Extract a loan application from raw document text.
pub fn extract_application(raw: &str) -> LoanApplication {
    let text = normalize(raw);
    let mut app = LoanApplication::default();

    if let Some(name) = first_capture(&NAME_PATTERNS, &text) {
        app.customer_name = name.trim().to_string();
    }
    if let Some(id) = capture(&NATIONAL_ID, &text) {
        app.national_id = id.to_string();
    }
    if let Some(addr) = capture(&RESIDENCE, &text) {
        app.residence = RESIDENCE_TRAILING_LABEL.replace(addr, "").trim().to_string();
    }
    if let Some(phone) = capture(&PHONE, &text) {
        app.phone = phone.to_string();
    }

    if let Some(purpose) = capture(&PURPOSE, &text) {
        app.loan_purpose = purpose.trim().to_string();
    } else if let Some(clause) = capture(&PURPOSE_FALLBACK, &text) {
        app.loan_purpose = clause.trim().chars().take(PURPOSE_CLAUSE_LIMIT).collect();
    }

    if let Some(v) = capture(&TOTAL_CAPITAL_NEED, &text) {
        app.total_capital_need = parse_amount(v);
    }
    if let Some(v) = capture(&EQUITY_CONTRIBUTION, &text) {
        app.equity_contribution = parse_amount(v);
    }
    if let Some(v) = capture(&LOAN_AMOUNT, &text) {
        app.loan_amount = parse_amount(v);
    }
    if let Some(v) = capture(&LOAN_TERM_MONTHS, &text) {
        app.term_months = v.parse().unwrap_or(0);
    }
    if let Some(v) = capture(&ANNUAL_RATE, &text) {
        app.annual_rate_pct = parse_percent(v);
    }

    let project_income = capture(&PROJECT_INCOME, &text)
        .map(parse_amount)
        .unwrap_or_default();
    let salary_income = capture(&SALARY_INCOME, &text)
        .map(parse_amount)
        .unwrap_or_default();
    app.monthly_income = match capture(&TOTAL_MONTHLY_INCOME, &text) {
        Some(v) => parse_amount(v),
        None => salary_income + project_income,
    };

    if let Some(v) = first_capture(&COLLATERAL_PATTERNS, &text) {
        app.collateral_value = parse_amount(v);
    }

    if let Some(v) = capture(&NET_PROFIT, &text) {
        app.net_annual_profit = parse_amount(v);
    } else if project_income > Decimal::ZERO {
        app.net_annual_profit = project_income * dec!(12);
    }

    app.apply_funding_defaults();
    app
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn first_capture<'t>(cascade: &[Regex], text: &'t str) -> Option<&'t str> {
    cascade.iter().find_map(|pattern| capture(pattern, text))
}
