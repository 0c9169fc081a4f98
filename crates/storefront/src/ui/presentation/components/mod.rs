//! Storefront components
//!
//! Each component reads the pack's [`CustomizerState`](super::state::CustomizerState)
//! from context; none of them hold widget state of their own.

pub mod checkout_panel;
pub mod notification_toast;
pub mod option_groups;
pub mod price_summary;
pub mod quantity_selector;
pub mod selection_summary;
pub mod soap_picker;
pub mod soap_slots;

pub use checkout_panel::CheckoutPanel;
pub use notification_toast::NotificationToast;
pub use option_groups::{EngravingOptions, PackageOptions, ShapeOptions};
pub use price_summary::PriceSummary;
pub use quantity_selector::QuantitySelector;
pub use selection_summary::SelectionSummary;
pub use soap_picker::{CategoryTabs, SoapPicker};
pub use soap_slots::SoapSlots;
