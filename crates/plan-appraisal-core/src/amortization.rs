use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::AppraisalError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::AppraisalResult;

/// Days between consecutive due dates. A fixed 30-day month, not a calendar
/// month: due dates drift from calendar anniversaries over long terms.
const PERIOD_DAYS: i64 = 30;

/// Fixed monthly annuity payment for a principal at an annual nominal rate
/// (in percent, monthly compounding) over `months` periods. Degenerates to
/// `principal / months` at a zero rate and to zero for a zero term.
pub fn annuity_payment(principal: Money, annual_rate_pct: Rate, months: u32) -> Money {
    if months == 0 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(months);
    let r = annual_rate_pct / dec!(1200);
    if r.is_zero() {
        return principal / n;
    }
    let factor = (Decimal::ONE + r).powd(n);
    principal * r * factor / (factor - Decimal::ONE)
}

/// Input for schedule generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    pub principal: Money,
    /// Annual nominal interest rate in percent (8.5 = 8.5%/year).
    pub annual_rate_pct: Rate,
    pub term_months: u32,
    /// Anchor for due dates; defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// A single repayment period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentPeriod {
    pub index: u32,
    pub due_date: NaiveDate,
    pub interest: Money,
    pub principal: Money,
    pub payment: Money,
    pub remaining_balance: Money,
}

/// Full schedule output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    /// Exact (unrounded) monthly payment; period rows carry the whole-unit
    /// presentation values.
    pub monthly_payment: Money,
    pub periods: Vec<InstallmentPeriod>,
    pub total_interest: Money,
    pub total_principal: Money,
}

/// Build the month-by-month repayment schedule for a loan.
pub fn build_amortization_schedule(
    input: &AmortizationInput,
) -> AppraisalResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.principal < Decimal::ZERO {
        return Err(AppraisalError::InvalidInput {
            field: "principal".into(),
            reason: "Principal cannot be negative.".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(AppraisalError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    if input.term_months == 0 {
        warnings.push("Term is zero; the schedule is empty and the payment is zero.".into());
    }

    let start_date = input
        .start_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let monthly_rate = input.annual_rate_pct / dec!(1200);
    let payment = annuity_payment(input.principal, input.annual_rate_pct, input.term_months);

    let mut periods = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;
    let mut total_interest = Decimal::ZERO;

    for index in 1..=input.term_months {
        let interest = balance * monthly_rate;
        let principal_part = payment - interest;
        // The running balance stays unrounded; flooring at zero absorbs the
        // final period's rounding drift.
        balance = (balance - principal_part).max(Decimal::ZERO);
        total_interest += interest;

        let due_date = start_date
            .checked_add_signed(Duration::days(PERIOD_DAYS * i64::from(index)))
            .ok_or_else(|| {
                AppraisalError::DateError(format!("due date out of range at period {index}"))
            })?;

        periods.push(InstallmentPeriod {
            index,
            due_date,
            interest: interest.round_dp(0),
            principal: principal_part.round_dp(0),
            payment: payment.round_dp(0),
            remaining_balance: balance.round_dp(0),
        });
    }

    let output = AmortizationOutput {
        monthly_payment: payment,
        total_interest: total_interest.round_dp(0),
        total_principal: (input.principal - balance).round_dp(0),
        periods,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "French annuity schedule (fixed 30-day periods)",
        &serde_json::json!({
            "monthly_rate": "annual_rate_pct / 1200",
            "period_length_days": PERIOD_DAYS,
            "row_rounding": "whole currency units",
        }),
        warnings,
        elapsed,
        output,
    ))
}
