use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use plan_appraisal_core::amortization::{build_amortization_schedule, AmortizationInput};
use plan_appraisal_core::locale;

use crate::input;

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal, display or plain format (e.g. 100.000.000)
    #[arg(long)]
    pub principal: Option<String>,

    /// Annual interest rate in percent (e.g. 8,5 or 8.5)
    #[arg(long)]
    pub rate: Option<String>,

    /// Term in months
    #[arg(long)]
    pub months: Option<u32>,

    /// First-period anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: AmortizationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AmortizationInput {
            principal: locale::parse_amount(
                &args
                    .principal
                    .ok_or("--principal is required (or provide --input)")?,
            ),
            annual_rate_pct: locale::parse_percent(
                &args.rate.ok_or("--rate is required (or provide --input)")?,
            ),
            term_months: args.months.ok_or("--months is required (or provide --input)")?,
            start_date: args.start_date,
        }
    };

    let result = build_amortization_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
