//! Infrastructure adapters: platform providers, the cart stub, and the
//! catalog loader.

pub mod cart;
pub mod catalog;
pub mod platform;

pub use cart::LoggingCart;
pub use catalog::{embedded_catalog, load_catalog};
