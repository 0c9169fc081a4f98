//! Pack presets - one parameterized widget, three configurations

mod config;
mod pricing;

pub use config::{PackConfig, PackKind, SelectionMode};
pub use pricing::{FlatPricing, PriceInput, PricingPolicy, TieredPricing};
