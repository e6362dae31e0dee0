use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::metrics::PlanMetricsOutput;
use crate::types::Rate;

/// Whether a gauge threshold bounds the ratio from above or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    Ceiling,
    Floor,
}

/// One chart-ready ratio reading against its fixed reference threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioGauge {
    pub name: String,
    pub value: Rate,
    pub threshold: Rate,
    pub kind: ThresholdKind,
    pub pass: bool,
}

/// The five charted ratios with their fixed thresholds: DSR ≤ 0.8,
/// LTV ≤ 0.8, E/C ≥ 0.2, Coverage ≥ 1.2, CFR ≥ 0. Undefined ratios are
/// omitted from the feed.
pub fn ratio_gauges(metrics: &PlanMetricsOutput) -> Vec<RatioGauge> {
    let mut gauges = Vec::with_capacity(5);
    push_gauge(&mut gauges, "DSR", metrics.dsr, dec!(0.8), ThresholdKind::Ceiling);
    push_gauge(&mut gauges, "LTV", metrics.ltv, dec!(0.8), ThresholdKind::Ceiling);
    push_gauge(&mut gauges, "E/C", metrics.equity_to_cost, dec!(0.2), ThresholdKind::Floor);
    push_gauge(
        &mut gauges,
        "Coverage",
        metrics.collateral_coverage,
        dec!(1.2),
        ThresholdKind::Floor,
    );
    push_gauge(
        &mut gauges,
        "CFR",
        metrics.cash_flow_reserve,
        Decimal::ZERO,
        ThresholdKind::Floor,
    );
    gauges
}

fn push_gauge(
    out: &mut Vec<RatioGauge>,
    name: &str,
    value: Option<Rate>,
    threshold: Rate,
    kind: ThresholdKind,
) {
    if let Some(value) = value {
        let pass = match kind {
            ThresholdKind::Ceiling => value <= threshold,
            ThresholdKind::Floor => value >= threshold,
        };
        out.push(RatioGauge {
            name: name.to_string(),
            value,
            threshold,
            kind,
            pass,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn metrics_fixture() -> PlanMetricsOutput {
        PlanMetricsOutput {
            monthly_payment: dec!(8_791_589),
            dsr: Some(dec!(0.586)),
            ltv: Some(dec!(0.667)),
            equity_to_cost: Some(dec!(0.333)),
            debt_to_income: dec!(0.667),
            roi: Some(dec!(0.4)),
            cash_flow_reserve: Some(dec!(0.414)),
            collateral_coverage: Some(dec!(1.5)),
            plan_consistent: true,
            composite_score: dec!(0.6),
        }
    }

    #[test]
    fn test_all_ratios_present_and_passing() {
        let gauges = ratio_gauges(&metrics_fixture());
        assert_eq!(gauges.len(), 5);
        assert!(gauges.iter().all(|g| g.pass));
        let names: Vec<&str> = gauges.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["DSR", "LTV", "E/C", "Coverage", "CFR"]);
    }

    #[test]
    fn test_ceiling_breach_fails() {
        let mut metrics = metrics_fixture();
        metrics.ltv = Some(dec!(0.95));
        let gauges = ratio_gauges(&metrics);
        let ltv = gauges.iter().find(|g| g.name == "LTV").unwrap();
        assert_eq!(ltv.kind, ThresholdKind::Ceiling);
        assert!(!ltv.pass);
    }

    #[test]
    fn test_floor_breach_fails() {
        let mut metrics = metrics_fixture();
        metrics.collateral_coverage = Some(dec!(1.0));
        let gauges = ratio_gauges(&metrics);
        let coverage = gauges.iter().find(|g| g.name == "Coverage").unwrap();
        assert!(!coverage.pass);
    }

    #[test]
    fn test_undefined_ratios_are_omitted() {
        let mut metrics = metrics_fixture();
        metrics.dsr = None;
        metrics.cash_flow_reserve = None;
        let gauges = ratio_gauges(&metrics);
        assert_eq!(gauges.len(), 3);
        assert!(gauges.iter().all(|g| g.name != "DSR" && g.name != "CFR"));
    }
}
