use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppraisalError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AppraisalError {
    fn from(e: serde_json::Error) -> Self {
        AppraisalError::SerializationError(e.to_string())
    }
}
