use plan_appraisal_core::amortization::{
    annuity_payment, build_amortization_schedule, AmortizationInput,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_reference_payment() {
    // 100M at 10%/year over 12 months.
    let pmt = annuity_payment(dec!(100_000_000), dec!(10), 12);
    assert!((pmt - dec!(8_791_588.72)).abs() < dec!(1));
}

#[test]
fn test_zero_rate_payment_is_exact_split() {
    let pmt = annuity_payment(dec!(100_000_000), Decimal::ZERO, 12);
    let expected = dec!(100_000_000) / dec!(12);
    assert!((pmt - expected).abs() < dec!(0.0000001));
}

#[test]
fn test_schedule_invariants_across_terms() {
    for (principal, rate, months) in [
        (dec!(100_000_000), dec!(10), 12u32),
        (dec!(350_000_000), dec!(8.5), 24),
        (dec!(1_000_000_000), dec!(12), 120),
        (dec!(5_000_000), Decimal::ZERO, 6),
    ] {
        let input = AmortizationInput {
            principal,
            annual_rate_pct: rate,
            term_months: months,
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1),
        };
        let schedule = build_amortization_schedule(&input).unwrap().result;

        assert_eq!(schedule.periods.len(), months as usize);
        assert_eq!(
            schedule.periods.last().unwrap().remaining_balance,
            Decimal::ZERO,
            "balance must close at zero for {principal} over {months} months"
        );

        // Rounded per-period principal drifts at most one unit per period.
        let principal_sum: Decimal = schedule.periods.iter().map(|p| p.principal).sum();
        let tolerance = Decimal::from(months);
        assert!(
            (principal_sum - principal).abs() <= tolerance,
            "principal drift beyond rounding tolerance: {principal_sum} vs {principal}"
        );

        for pair in schedule.periods.windows(2) {
            assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
            assert_eq!(
                (pair[1].due_date - pair[0].due_date).num_days(),
                30,
                "due dates must stay 30 days apart"
            );
        }
    }
}

#[test]
fn test_interest_plus_principal_equals_payment_per_period() {
    let input = AmortizationInput {
        principal: dec!(200_000_000),
        annual_rate_pct: dec!(9),
        term_months: 36,
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
    };
    let schedule = build_amortization_schedule(&input).unwrap().result;

    for period in &schedule.periods {
        // Row values are independently rounded, so allow one unit of drift.
        let recomposed = period.interest + period.principal;
        assert!((recomposed - period.payment).abs() <= dec!(1));
    }
}
