//! Label patterns for the plan-document field rules, compiled once at first
//! use. Cascades are ordered: the first pattern that matches wins.
//!
//! Labels match case-insensitively. Name captures stay case-sensitive over
//! the explicit Vietnamese alphabet so that only capital-initial word runs
//! are taken, and the run cannot cross a line boundary.

use once_cell::sync::Lazy;
use regex::Regex;

const UPPER_VN: &str =
    "A-ZÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬĐÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÙÚỦŨỤƯỪỨỬỮỰỲÝỶỸỴ";
const LOWER_VN: &str =
    "a-zàáảãạăằắẳẵặâầấẩẫậđèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵ";

fn name_run() -> String {
    let word = format!("[{UPPER_VN}][{LOWER_VN}{UPPER_VN}]*");
    format!(r"{word}(?:[ \t]+{word})*")
}

/// Customer name: numbered "Họ và tên" heading, then the "Ông (bà)" form.
pub(crate) static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let run = name_run();
    vec![
        Regex::new(&format!(
            r"(?i:(?:\d+\.\s*)?họ\s+và\s+tên)\s*[:：]\s*({run})"
        ))
        .unwrap(),
        Regex::new(&format!(
            r"(?i:(?:ông|bà)\s*\((?:bà|ông)\))\s*[:：]\s*({run})"
        ))
        .unwrap(),
    ]
});

/// National ID: 9-12 digits after any CMND/CCCD/passport label variant.
pub(crate) static NATIONAL_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:CMND|CCCD)(?:\s*/\s*(?:CCCD|CMND))?(?:\s*/\s*hộ\s*chiếu)?\s*[:：]\s*(\d{9,12})")
        .unwrap()
});

/// Residence: rest of the labelled line. A phone label that shares the line
/// is stripped afterwards with [`RESIDENCE_TRAILING_LABEL`].
pub(crate) static RESIDENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)nơi\s*cư\s*trú\s*[:：]\s*([^\n]+)").unwrap());

pub(crate) static RESIDENCE_TRAILING_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*số\s*điện\s*thoại.*$").unwrap());

/// Local mobile number: leading 0, 10-11 digits total.
pub(crate) static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)số\s*điện\s*thoại\s*[:：]\s*(0\d{9,10})").unwrap());

/// Loan purpose, explicit label form.
pub(crate) static PURPOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)mục\s*đích\s*vay\s*[:：]\s*([^\n]+)").unwrap());

/// Loan purpose fallback: the usage clause of the bank-loan sentence. The
/// caller truncates this capture to 200 characters.
pub(crate) static PURPOSE_FALLBACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)vốn\s*vay\s*Agribank.*?[:：].*?(?:thực\s*hiện|sử\s*dụng\s*vào)\s*([^\n]+)")
        .unwrap()
});

pub(crate) static TOTAL_CAPITAL_NEED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\d+\.\s*)?tổng\s*nhu\s*cầu\s*vốn\s*[:：]\s*([\d\.,]+)").unwrap()
});

pub(crate) static EQUITY_CONTRIBUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)vốn\s*đối\s*ứng\s*(?:tham\s*gia)?[^\d]*([\d\.,]+)\s*đồng").unwrap()
});

pub(crate) static LOAN_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)vốn\s*vay\s*Agribank\s*(?:số\s*tiền)?[:\s]*([\d\.,]+)\s*đồng").unwrap()
});

pub(crate) static LOAN_TERM_MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)thời\s*hạn\s*vay\s*[:：]\s*(\d+)\s*tháng").unwrap());

pub(crate) static ANNUAL_RATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)lãi\s*suất\s*[:：]\s*([\d\.,]+)\s*%").unwrap());

/// Income from the plan's own revenue, per month.
pub(crate) static PROJECT_INCOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)từ\s*nguồn\s*thu\s*của\s*dự\s*án[^\d]*([\d\.,]+)\s*đồng\s*/\s*tháng").unwrap()
});

/// Salary income, per month.
pub(crate) static SALARY_INCOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)thu\s*nhập\s*từ\s*lương\s*[:：]\s*([\d\.,]+)\s*đồng\s*/\s*tháng").unwrap()
});

/// Explicit total stable monthly income. Preferred over the per-source sum.
pub(crate) static TOTAL_MONTHLY_INCOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tổng\s*thu\s*nhập\s*(?:ổn\s*định)?\s*(?:hàng\s*)?tháng\s*[:：]\s*([\d\.,]+)\s*đồng")
        .unwrap()
});

/// Collateral: first listed asset's value field, then the expected purchase
/// value label.
pub(crate) static COLLATERAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)tài\s*sản\s*1[^\n]*giá\s*trị\s*[:：]\s*([\d\.,]+)\s*đồng").unwrap(),
        Regex::new(r"(?i)giá\s*trị\s*nhà\s*dự\s*kiến\s*mua\s*[:：]\s*([\d\.,]+)\s*đồng").unwrap(),
    ]
});

pub(crate) static NET_PROFIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)lợi\s*nhuận\s*(?:ròng)?\s*(?:năm)?[^\d]*([\d\.,]+)\s*đồng").unwrap()
});
