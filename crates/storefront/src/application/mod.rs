//! Application layer - use cases over the customizer aggregate

pub mod error;
pub mod services;

pub use error::ServiceError;
