use clap::Args;
use serde_json::Value;

use plan_appraisal_core::advisory::build_advisory_request;
use plan_appraisal_core::amortization::annuity_payment;
use plan_appraisal_core::appraisal::metrics::evaluate_plan;
use plan_appraisal_core::extraction;

use super::read_document;

/// Arguments for advisory request assembly
#[derive(Args)]
pub struct AdvisoryArgs {
    /// Path to the plan document (plain text); omit to pipe via stdin
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_advisory(args: AdvisoryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let document = read_document(&args.input)?;
    let app = extraction::extract_from_bytes(&document);

    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);
    let metrics = evaluate_plan(&app, pmt)?;
    let request = build_advisory_request(&app, &metrics.result);

    Ok(serde_json::to_value(request)?)
}
