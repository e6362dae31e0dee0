use clap::Args;
use serde_json::Value;

use plan_appraisal_core::amortization::annuity_payment;
use plan_appraisal_core::appraisal::metrics::evaluate_plan;
use plan_appraisal_core::locale;
use plan_appraisal_core::LoanApplication;

use crate::input;

/// Arguments for metrics computation. Money flags accept the display
/// format (1.234.567) and plain digits alike.
#[derive(Args)]
pub struct MetricsArgs {
    /// Path to a LoanApplication JSON file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub loan_amount: Option<String>,

    /// Annual interest rate in percent (e.g. 8,5 or 8.5)
    #[arg(long)]
    pub rate: Option<String>,

    /// Term in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Total stable monthly income
    #[arg(long)]
    pub monthly_income: Option<String>,

    /// Collateral value
    #[arg(long)]
    pub collateral: Option<String>,

    /// Total capital need
    #[arg(long)]
    pub capital_need: Option<String>,

    /// Owner equity contribution
    #[arg(long)]
    pub equity: Option<String>,

    /// Existing total debt
    #[arg(long)]
    pub existing_debt: Option<String>,

    /// Net annual profit
    #[arg(long)]
    pub net_profit: Option<String>,

    /// Total investment
    #[arg(long)]
    pub investment: Option<String>,
}

pub fn run_metrics(args: MetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let app: LoanApplication = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let mut app = LoanApplication {
            loan_amount: parse_money(&args.loan_amount),
            annual_rate_pct: args
                .rate
                .as_deref()
                .map(locale::parse_percent)
                .unwrap_or_default(),
            term_months: args.months.unwrap_or(0),
            monthly_income: parse_money(&args.monthly_income),
            collateral_value: parse_money(&args.collateral),
            total_capital_need: parse_money(&args.capital_need),
            equity_contribution: parse_money(&args.equity),
            existing_debt: parse_money(&args.existing_debt),
            net_annual_profit: parse_money(&args.net_profit),
            total_investment: parse_money(&args.investment),
            ..Default::default()
        };
        // Manual entry is partial by nature; fill the funding fields the
        // same way extraction does.
        app.apply_funding_defaults();
        app
    };

    let pmt = annuity_payment(app.loan_amount, app.annual_rate_pct, app.term_months);
    let result = evaluate_plan(&app, pmt)?;
    Ok(serde_json::to_value(result)?)
}

fn parse_money(flag: &Option<String>) -> plan_appraisal_core::Money {
    flag.as_deref().map(locale::parse_amount).unwrap_or_default()
}
