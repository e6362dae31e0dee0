use plan_appraisal_core::amortization::annuity_payment;
use plan_appraisal_core::appraisal::gauges::ratio_gauges;
use plan_appraisal_core::appraisal::metrics::evaluate_plan;
use plan_appraisal_core::LoanApplication;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn reference_application() -> LoanApplication {
    LoanApplication {
        loan_amount: dec!(100_000_000),
        annual_rate_pct: dec!(10),
        term_months: 12,
        monthly_income: dec!(15_000_000),
        collateral_value: dec!(150_000_000),
        equity_contribution: dec!(50_000_000),
        total_capital_need: dec!(150_000_000),
        total_investment: dec!(150_000_000),
        net_annual_profit: dec!(60_000_000),
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_reference_case() {
    let app = reference_application();
    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);
    assert!((pmt - dec!(8_791_589)).abs() < dec!(1));

    let metrics = evaluate_plan(&app, pmt).unwrap().result;

    let dsr = metrics.dsr.unwrap();
    assert!((dsr - dec!(0.586)).abs() < dec!(0.001));

    let ltv = metrics.ltv.unwrap();
    assert!((ltv - dec!(0.667)).abs() < dec!(0.001));

    assert!(metrics.plan_consistent);
}

#[test]
fn test_composite_score_is_reproducible() {
    let app = reference_application();
    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);

    let first = evaluate_plan(&app, pmt).unwrap().result.composite_score;
    let second = evaluate_plan(&app, pmt).unwrap().result.composite_score;
    assert_eq!(first, second);
    // Three-decimal rounding is part of the contract.
    assert_eq!(first, first.round_dp(3));
}

#[test]
fn test_gauges_for_reference_case() {
    let app = reference_application();
    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);
    let metrics = evaluate_plan(&app, pmt).unwrap().result;
    let gauges = ratio_gauges(&metrics);

    assert_eq!(gauges.len(), 5);
    // DSR 0.586 ≤ 0.8, LTV 0.667 ≤ 0.8, E/C 0.333 ≥ 0.2,
    // Coverage 1.5 ≥ 1.2, CFR 0.414 ≥ 0.
    assert!(gauges.iter().all(|g| g.pass));
}

#[test]
fn test_extracted_record_flows_into_metrics() {
    let text = "Vốn đối ứng tham gia 30.000.000 đồng\n\
                Vốn vay Agribank số tiền 70.000.000 đồng\n\
                Thời hạn vay: 12 tháng\n\
                Lãi suất: 10 %\n\
                Tổng thu nhập hàng tháng: 20.000.000 đồng\n";
    let app = plan_appraisal_core::extraction::extract_application(text);
    assert_eq!(app.total_capital_need, dec!(100_000_000));

    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);
    let metrics = evaluate_plan(&app, pmt).unwrap().result;

    // Collateral was repaired to the capital need, so LTV is defined.
    assert_eq!(metrics.ltv, Some(dec!(0.7)));
    assert!(metrics.plan_consistent);
}

#[test]
fn test_empty_record_still_produces_metrics() {
    let app = LoanApplication::default();
    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);
    let metrics = evaluate_plan(&app, pmt).unwrap().result;

    assert_eq!(metrics.dsr, None);
    assert_eq!(metrics.ltv, None);
    assert_eq!(metrics.composite_score, dec!(0));
    assert!(ratio_gauges(&metrics).is_empty());
}
