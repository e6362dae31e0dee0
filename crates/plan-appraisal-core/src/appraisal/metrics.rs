use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::AppraisalError;
use crate::types::{with_metadata, ComputationOutput, LoanApplication, Money, Rate};
use crate::AppraisalResult;

/// Floor applied to annual income in the debt-to-income denominator.
const INCOME_FLOOR: Decimal = dec!(0.000000001);

/// Plan-consistency tolerance: 2% relative or 1,000,000 absolute,
/// whichever is wider.
const CONSISTENCY_REL_TOL: Decimal = dec!(0.02);
const CONSISTENCY_ABS_TOL: Decimal = dec!(1_000_000);

/// Composite score weights and normalization targets.
const W_DSR: Decimal = dec!(0.25);
const W_LTV: Decimal = dec!(0.25);
const W_EQUITY: Decimal = dec!(0.20);
const W_CFR: Decimal = dec!(0.20);
const W_COVERAGE: Decimal = dec!(0.10);
const EQUITY_TARGET: Decimal = dec!(0.3);
const COVERAGE_TARGET: Decimal = dec!(1.5);

/// Credit ratios and composite score for one application. Ratios whose
/// denominator is not positive are `None`, never an error; debt-to-income
/// instead floors its denominator and is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetricsOutput {
    pub monthly_payment: Money,
    /// Debt service ratio: monthly payment over monthly income.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsr: Option<Rate>,
    /// Loan-to-value: loan amount over collateral value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ltv: Option<Rate>,
    /// Owner equity over total capital need.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equity_to_cost: Option<Rate>,
    /// (Existing debt + loan) over annual income.
    pub debt_to_income: Rate,
    /// Net annual profit over total investment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<Rate>,
    /// Residual income share after debt service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_flow_reserve: Option<Rate>,
    /// Collateral value over loan amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collateral_coverage: Option<Rate>,
    /// Whether stated capital need matches its declared funding sources.
    pub plan_consistent: bool,
    /// Weighted blend of the normalized ratios, rounded to 3 decimals.
    pub composite_score: Decimal,
}

/// Compute the full ratio set and composite score for an application, given
/// the monthly payment from the amortization engine. Recomputes everything
/// from scratch; there is no incremental path.
pub fn evaluate_plan(
    app: &LoanApplication,
    monthly_payment: Money,
) -> AppraisalResult<ComputationOutput<PlanMetricsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_application(app)?;
    if monthly_payment < Decimal::ZERO {
        return Err(AppraisalError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment cannot be negative.".into(),
        });
    }

    let income = app.monthly_income;

    let dsr = ratio(monthly_payment, income);
    let cash_flow_reserve = ratio(income - monthly_payment, income);
    if dsr.is_none() {
        warnings.push("Monthly income is zero; DSR and cash-flow reserve are undefined.".into());
    }

    let equity_to_cost = ratio(app.equity_contribution, app.total_capital_need);
    if equity_to_cost.is_none() {
        warnings.push("Total capital need is zero; equity-to-cost is undefined.".into());
    }

    let ltv = ratio(app.loan_amount, app.collateral_value);
    if ltv.is_none() {
        warnings.push("Collateral value is zero; LTV is undefined.".into());
    }

    let collateral_coverage = ratio(app.collateral_value, app.loan_amount);
    if collateral_coverage.is_none() {
        warnings.push("Loan amount is zero; collateral coverage is undefined.".into());
    }

    let roi = ratio(app.net_annual_profit, app.total_investment);
    if roi.is_none() {
        warnings.push("Total investment is zero; ROI is undefined.".into());
    }

    let annual_income = (income * dec!(12)).max(INCOME_FLOOR);
    let debt_to_income = (app.existing_debt + app.loan_amount) / annual_income;

    let plan_consistent = approx_equal(
        app.total_capital_need,
        app.equity_contribution + app.loan_amount,
    );

    // Undefined ratios drop their term outright; the surviving weights are
    // not rescaled, so missing data lowers the reachable maximum.
    let mut score = Decimal::ZERO;
    if let Some(d) = dsr {
        score += (Decimal::ONE - d.min(Decimal::ONE)).max(Decimal::ZERO) * W_DSR;
    }
    if let Some(l) = ltv {
        score += (Decimal::ONE - l.min(Decimal::ONE)).max(Decimal::ZERO) * W_LTV;
    }
    if let Some(ec) = equity_to_cost {
        score += (ec / EQUITY_TARGET).min(Decimal::ONE) * W_EQUITY;
    }
    if let Some(cfr) = cash_flow_reserve {
        score += cfr.clamp(Decimal::ZERO, Decimal::ONE) * W_CFR;
    }
    if let Some(cov) = collateral_coverage {
        score += (cov / COVERAGE_TARGET).min(Decimal::ONE) * W_COVERAGE;
    }

    let output = PlanMetricsOutput {
        monthly_payment,
        dsr,
        ltv,
        equity_to_cost,
        debt_to_income,
        roi,
        cash_flow_reserve,
        collateral_coverage,
        plan_consistent,
        composite_score: score.round_dp(3),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Plan appraisal ratios and composite score",
        &serde_json::json!({
            "income_floor": "1e-9 on annual income for debt-to-income",
            "undefined_ratios": "omitted from the composite without reweighting",
            "consistency_tolerance": "2% relative or 1,000,000 absolute",
            "score_weights": {
                "dsr": W_DSR.to_string(),
                "ltv": W_LTV.to_string(),
                "equity_to_cost": W_EQUITY.to_string(),
                "cash_flow_reserve": W_CFR.to_string(),
                "collateral_coverage": W_COVERAGE.to_string(),
            },
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Rate> {
    (denominator > Decimal::ZERO).then(|| numerator / denominator)
}

/// Two-sided approximate equality under the combined tolerance.
fn approx_equal(a: Decimal, b: Decimal) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= (CONSISTENCY_REL_TOL * scale).max(CONSISTENCY_ABS_TOL)
}

fn validate_application(app: &LoanApplication) -> AppraisalResult<()> {
    let monetary_fields = [
        ("total_capital_need", app.total_capital_need),
        ("equity_contribution", app.equity_contribution),
        ("loan_amount", app.loan_amount),
        ("monthly_income", app.monthly_income),
        ("collateral_value", app.collateral_value),
        ("existing_debt", app.existing_debt),
        ("net_annual_profit", app.net_annual_profit),
        ("total_investment", app.total_investment),
    ];
    for (field, value) in monetary_fields {
        if value < Decimal::ZERO {
            return Err(AppraisalError::InvalidInput {
                field: field.into(),
                reason: "Monetary fields cannot be negative.".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_application() -> LoanApplication {
        LoanApplication {
            total_capital_need: dec!(150_000_000),
            equity_contribution: dec!(50_000_000),
            loan_amount: dec!(100_000_000),
            annual_rate_pct: dec!(10),
            term_months: 12,
            monthly_income: dec!(15_000_000),
            collateral_value: dec!(150_000_000),
            existing_debt: dec!(20_000_000),
            net_annual_profit: dec!(60_000_000),
            total_investment: dec!(150_000_000),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_ratios() {
        let app = sample_application();
        let result = evaluate_plan(&app, dec!(8_791_589)).unwrap();
        let m = &result.result;

        // DSR = 8,791,589 / 15,000,000
        let dsr = m.dsr.unwrap();
        assert!((dsr - dec!(0.586)).abs() < dec!(0.001));

        // LTV = 100M / 150M
        let ltv = m.ltv.unwrap();
        assert!((ltv - dec!(0.6667)).abs() < dec!(0.0001));

        // E/C = 50M / 150M
        let ec = m.equity_to_cost.unwrap();
        assert!((ec - dec!(0.3333)).abs() < dec!(0.0001));

        // DTI = (20M + 100M) / 180M
        assert!((m.debt_to_income - dec!(0.6667)).abs() < dec!(0.0001));

        // ROI = 60M / 150M
        assert_eq!(m.roi, Some(dec!(0.4)));

        // Coverage = 150M / 100M
        assert_eq!(m.collateral_coverage, Some(dec!(1.5)));

        // Plan is consistent: 150M == 50M + 100M exactly.
        assert!(m.plan_consistent);
    }

    #[test]
    fn test_zero_income_yields_undefined_sentinels() {
        let mut app = sample_application();
        app.monthly_income = Decimal::ZERO;
        let result = evaluate_plan(&app, dec!(8_791_589)).unwrap();
        let m = &result.result;

        assert_eq!(m.dsr, None);
        assert_eq!(m.cash_flow_reserve, None);
        // Debt-to-income floors the denominator instead of going undefined.
        assert!(m.debt_to_income > dec!(1_000_000_000));
        assert!(result.warnings.iter().any(|w| w.contains("income")));
    }

    #[test]
    fn test_undefined_terms_lower_score_without_reweighting() {
        let app = sample_application();
        let full = evaluate_plan(&app, dec!(8_791_589)).unwrap().result;

        let mut no_collateral = sample_application();
        no_collateral.collateral_value = Decimal::ZERO;
        let partial = evaluate_plan(&no_collateral, dec!(8_791_589)).unwrap().result;

        // LTV and coverage terms vanish; nothing is rescaled to compensate.
        assert!(partial.composite_score < full.composite_score);
        assert_eq!(partial.ltv, None);
        assert_eq!(partial.collateral_coverage, None);
    }

    #[test]
    fn test_plan_consistency_tolerances() {
        let mut app = sample_application();
        app.total_capital_need = dec!(100_000_000);
        app.equity_contribution = dec!(30_000_000);
        app.loan_amount = dec!(70_500_000);
        // 100M vs 100.5M: inside the 2% relative band.
        let result = evaluate_plan(&app, Decimal::ZERO).unwrap();
        assert!(result.result.plan_consistent);

        app.loan_amount = dec!(76_000_000);
        // 100M vs 106M: outside both bands.
        let result = evaluate_plan(&app, Decimal::ZERO).unwrap();
        assert!(!result.result.plan_consistent);
    }

    #[test]
    fn test_negative_monetary_field_rejected() {
        let mut app = sample_application();
        app.collateral_value = dec!(-1);
        let err = evaluate_plan(&app, Decimal::ZERO).unwrap_err();
        match err {
            AppraisalError::InvalidInput { field, .. } => assert_eq!(field, "collateral_value"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let app = sample_application();
        let a = evaluate_plan(&app, dec!(8_791_589)).unwrap().result;
        let b = evaluate_plan(&app, dec!(8_791_589)).unwrap().result;
        assert_eq!(a.composite_score, b.composite_score);
    }

    #[test]
    fn test_score_hand_computed() {
        let app = sample_application();
        let m = evaluate_plan(&app, dec!(9_000_000)).unwrap().result;

        // dsr = 0.6 => 0.4 * 0.25 = 0.10
        // ltv = 2/3 => (1/3) * 0.25 = 0.0833...
        // e/c = 1/3 => min(1, 1.1111) = 1 => 0.20
        // cfr = 0.4 => 0.4 * 0.20 = 0.08
        // coverage = 1.5 => min(1, 1.0) = 1 => 0.10
        // total = 0.5633...
        assert_eq!(m.composite_score, dec!(0.563));
    }
}
