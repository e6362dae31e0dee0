use clap::Args;
use serde_json::{json, Value};

use plan_appraisal_core::extraction;

use super::read_document;

/// Arguments for document extraction
#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the plan document (plain text); omit to pipe via stdin
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_extract(args: ExtractArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let document = read_document(&args.input)?;
    let app = extraction::extract_from_bytes(&document);

    let display: serde_json::Map<String, Value> = app
        .display_fields()
        .into_iter()
        .map(|(label, text)| (label.to_string(), Value::String(text)))
        .collect();

    Ok(json!({
        "application": app,
        "display": display,
    }))
}
