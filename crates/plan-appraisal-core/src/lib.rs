pub mod amortization;
pub mod appraisal;
pub mod error;
pub mod locale;
pub mod types;

#[cfg(feature = "extraction")]
pub mod extraction;

#[cfg(feature = "advisory")]
pub mod advisory;

pub use error::AppraisalError;
pub use types::*;

/// Standard result type for all appraisal operations
pub type AppraisalResult<T> = Result<T, AppraisalError>;
