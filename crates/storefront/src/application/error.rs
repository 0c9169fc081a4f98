//! Application service errors

use jaboneria_domain::DomainError;
use jaboneria_shared::WireError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The widget refused the operation; state is unchanged
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A snapshot could not be encoded for storage
    #[error("Failed to encode record: {0}")]
    Encode(WireError),

    /// The cart rejected or failed to receive the order
    #[error("Cart error: {0:#}")]
    Cart(anyhow::Error),
}

impl ServiceError {
    /// The domain error behind this failure, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> WireError {
        WireError::from(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    #[test]
    fn encode_failures_read_as_encode() {
        let err = ServiceError::Encode(json_error());
        assert!(err.to_string().starts_with("Failed to encode record"));
        assert!(err.as_domain().is_none());
    }
}
