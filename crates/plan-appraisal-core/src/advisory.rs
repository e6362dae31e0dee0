//! Advisory request assembly.
//!
//! The appraisal surface asks an external credit-advisory model for a
//! lend / lend-with-conditions / decline recommendation. This module only
//! builds that request: a snapshot of the formatted application and metrics
//! plus the fixed textual thresholds. The reply is displayed verbatim by the
//! caller and never parsed here.

use rust_decimal_macros::dec;
use serde::Serialize;
use serde_json::Value;

use crate::appraisal::metrics::PlanMetricsOutput;
use crate::locale::format_amount;
use crate::types::{LoanApplication, Rate};

/// Snapshot handed to the advisory collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryRequest {
    /// Application fields as display strings, keyed by their form labels.
    pub application: Value,
    /// Metrics as display strings: ratios as percentages, the payment as a
    /// currency amount, unitless figures with two decimals.
    pub metrics: Value,
    /// The natural-language request submitted to the advisory model.
    pub prompt: String,
}

/// Build the advisory request for an appraised application.
pub fn build_advisory_request(
    app: &LoanApplication,
    metrics: &PlanMetricsOutput,
) -> AdvisoryRequest {
    let application = Value::Object(
        app.display_fields()
            .into_iter()
            .map(|(label, text)| (label.to_string(), Value::String(text)))
            .collect(),
    );

    let metrics_view = serde_json::json!({
        "PMT_thang": format_amount(metrics.monthly_payment),
        "DSR": percent_view(metrics.dsr),
        "LTV": percent_view(metrics.ltv),
        "E_over_C": percent_view(metrics.equity_to_cost),
        "Debt_over_Income": format!("{:.2}", metrics.debt_to_income),
        "ROI": percent_view(metrics.roi),
        "CFR": percent_view(metrics.cash_flow_reserve),
        "Coverage": percent_view(metrics.collateral_coverage),
        "Phuong_an_hop_ly": metrics.plan_consistent,
        "Score": format!("{:.3}", metrics.composite_score),
    });

    let prompt = format!(
        "Bạn là chuyên viên tín dụng. Phân tích hồ sơ vay sau (JSON) và đưa ra đề xuất \
         \"Cho vay\" / \"Cho vay có điều kiện\" / \"Không cho vay\" kèm giải thích ngắn gọn (<=200 từ).\n\
         JSON đầu vào:\n\
         Khách hàng & phương án: {application}\n\
         Chỉ tiêu tính toán: {metrics_view}\n\
         Ngưỡng tham chiếu:\n\
         - DSR ≤ 0.8; LTV ≤ 0.8; E/C ≥ 0.2; CFR > 0; Coverage > 1.2.\n\
         - Nếu thông tin thiếu, hãy nêu giả định rõ ràng.\n"
    );

    AdvisoryRequest {
        application,
        metrics: metrics_view,
        prompt,
    }
}

fn percent_view(value: Option<Rate>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * dec!(100)),
        None => "n/a".into(),
    }
}
