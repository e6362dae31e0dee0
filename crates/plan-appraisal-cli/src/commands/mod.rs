pub mod advisory;
pub mod appraise;
pub mod extract;
pub mod metrics;
pub mod schedule;

use crate::input;

/// Read the plan document from a path or piped stdin.
pub(crate) fn read_document(
    path: &Option<String>,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_bytes(path)
    } else if let Some(bytes) = input::stdin::read_stdin_bytes()? {
        Ok(bytes)
    } else {
        Err("--input <document> is required (or pipe the document via stdin)".into())
    }
}
