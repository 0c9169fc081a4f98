//! Jaboneria domain - pack customization state, pricing, and invariants.
//!
//! Pure logic only: no markup, no storage, no logging. The storefront crate
//! feeds user input into a [`Customizer`] and renders what comes back.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod packs;
pub mod value_objects;

pub use aggregates::{CheckoutGate, Customizer};
pub use entities::{
    Catalog, OrderRecord, SavedConfiguration, Selection, SelectionSummary, Slot, Soap,
    SoapCategory,
};
pub use error::DomainError;
pub use events::CustomizerEvent;
pub use ids::OrderId;
pub use packs::{
    FlatPricing, PackConfig, PackKind, PriceInput, PricingPolicy, SelectionMode, TieredPricing,
};
pub use value_objects::{
    Engraving, OptionPrices, PackageType, Price, QuantityRange, Shape, SoapId, SoapName,
};
