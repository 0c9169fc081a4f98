//! Jaboneria Shared - wire formats crossing the storefront boundary
//!
//! This crate contains the JSON shapes exchanged with collaborators the
//! storefront does not own:
//! - The order record handed to the cart backend
//! - The configuration snapshot written to scratch storage
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and conversions
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **Stable keys** - field names match what the cart and storage expect

pub mod configuration;
pub mod error;
pub mod order;

pub use configuration::SavedConfigurationData;
pub use error::WireError;
pub use order::{OrderRecordData, SoapData};
