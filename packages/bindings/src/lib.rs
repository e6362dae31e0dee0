use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

#[napi]
pub fn extract_application(document: String) -> NapiResult<String> {
    let app = plan_appraisal_core::extraction::extract_application(&document);
    serde_json::to_string(&app).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: plan_appraisal_core::amortization::AmortizationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = plan_appraisal_core::amortization::build_amortization_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Metrics & advisory
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_plan(application_json: String) -> NapiResult<String> {
    let app: plan_appraisal_core::LoanApplication =
        serde_json::from_str(&application_json).map_err(to_napi_error)?;
    let pmt = plan_appraisal_core::amortization::annuity_payment(
        app.loan_amount,
        app.annual_rate_pct,
        app.term_months,
    );
    let output = plan_appraisal_core::appraisal::metrics::evaluate_plan(&app, pmt)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn advisory_request(application_json: String) -> NapiResult<String> {
    let app: plan_appraisal_core::LoanApplication =
        serde_json::from_str(&application_json).map_err(to_napi_error)?;
    let pmt = plan_appraisal_core::amortization::annuity_payment(
        app.loan_amount,
        app.annual_rate_pct,
        app.term_months,
    );
    let metrics = plan_appraisal_core::appraisal::metrics::evaluate_plan(&app, pmt)
        .map_err(to_napi_error)?;
    let request = plan_appraisal_core::advisory::build_advisory_request(&app, &metrics.result);
    serde_json::to_string(&request).map_err(to_napi_error)
}
