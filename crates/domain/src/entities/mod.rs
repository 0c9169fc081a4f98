//! Entities - catalog data and the records the customizer produces

mod catalog;
mod order;
mod soap;

pub use catalog::Catalog;
pub use order::{OrderRecord, SavedConfiguration, SelectionSummary, Slot};
pub use soap::{Selection, Soap, SoapCategory};
