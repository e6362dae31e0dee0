use chrono::NaiveDate;
use clap::Args;
use serde_json::{json, Value};

use plan_appraisal_core::amortization::{build_amortization_schedule, AmortizationInput};
use plan_appraisal_core::appraisal::gauges::ratio_gauges;
use plan_appraisal_core::appraisal::metrics::evaluate_plan;
use plan_appraisal_core::extraction;

use super::read_document;

/// Arguments for the full appraisal pipeline
#[derive(Args)]
pub struct AppraiseArgs {
    /// Path to the plan document (plain text); omit to pipe via stdin
    #[arg(long)]
    pub input: Option<String>,

    /// First-period anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_appraise(args: AppraiseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let document = read_document(&args.input)?;
    let app = extraction::extract_from_bytes(&document);

    let schedule = build_amortization_schedule(&AmortizationInput {
        principal: app.loan_amount,
        annual_rate_pct: app.annual_rate_pct,
        term_months: app.term_months,
        start_date: args.start_date,
    })?;

    let metrics = evaluate_plan(&app, schedule.result.monthly_payment)?;
    let gauges = ratio_gauges(&metrics.result);

    Ok(json!({
        "application": app,
        "schedule": schedule,
        "metrics": metrics,
        "gauges": gauges,
    }))
}
