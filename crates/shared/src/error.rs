//! Errors raised while decoding wire records

use jaboneria_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    /// Payload was not valid JSON for the expected shape
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload decoded but a field was rejected by the domain
    #[error("Invalid field: {0}")]
    Domain(#[from] DomainError),
}
