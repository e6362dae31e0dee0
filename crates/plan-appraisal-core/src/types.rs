use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::locale;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates and ratios expressed as decimals (0.05 = 5%), except fields whose
/// name carries a `_pct` suffix, which hold percentages as entered (8.5 = 8.5%).
pub type Rate = Decimal;

/// One borrower's loan-purpose plan, as extracted from a document or entered
/// by hand. Lives for a single appraisal session; the schedule and metrics
/// engines only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanApplication {
    pub customer_name: String,
    pub national_id: String,
    pub residence: String,
    pub phone: String,
    pub loan_purpose: String,
    pub total_capital_need: Money,
    pub equity_contribution: Money,
    pub loan_amount: Money,
    /// Annual nominal interest rate in percent (8.5 = 8.5%/year).
    pub annual_rate_pct: Rate,
    pub term_months: u32,
    pub monthly_income: Money,
    pub collateral_value: Money,
    pub existing_debt: Money,
    pub net_annual_profit: Money,
    pub total_investment: Money,
}

impl LoanApplication {
    /// Cross-field repair pass. Order matters: capital need is repaired
    /// first, then total investment and collateral default from it.
    pub fn apply_funding_defaults(&mut self) {
        if self.total_capital_need.is_zero()
            && (self.equity_contribution + self.loan_amount) > Decimal::ZERO
        {
            self.total_capital_need = self.equity_contribution + self.loan_amount;
        }
        if self.total_investment.is_zero() {
            self.total_investment = self.total_capital_need;
        }
        if self.collateral_value.is_zero() && self.total_capital_need > Decimal::ZERO {
            self.collateral_value = self.total_capital_need;
        }
    }

    /// Label/value pairs for an editing surface, money in grouped
    /// whole-unit format and the rate with a comma decimal mark.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Họ và tên", self.customer_name.clone()),
            ("CMND/CCCD", self.national_id.clone()),
            ("Nơi cư trú", self.residence.clone()),
            ("Số điện thoại", self.phone.clone()),
            ("Mục đích vay", self.loan_purpose.clone()),
            ("Tổng nhu cầu vốn", locale::format_amount(self.total_capital_need)),
            ("Vốn đối ứng", locale::format_amount(self.equity_contribution)),
            ("Số tiền vay", locale::format_amount(self.loan_amount)),
            ("Lãi suất năm (%)", locale::format_percent(self.annual_rate_pct)),
            ("Thời hạn vay (tháng)", self.term_months.to_string()),
            ("Thu nhập hàng tháng", locale::format_amount(self.monthly_income)),
            ("Giá trị TSĐB", locale::format_amount(self.collateral_value)),
            ("Tổng nợ hiện tại", locale::format_amount(self.existing_debt)),
            ("Lợi nhuận ròng năm", locale::format_amount(self.net_annual_profit)),
            ("Tổng vốn đầu tư", locale::format_amount(self.total_investment)),
        ]
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
