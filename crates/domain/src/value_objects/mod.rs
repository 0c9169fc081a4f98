//! Value objects - Immutable objects defined by their attributes

mod names;
mod options;
mod price;
mod quantity;

pub use names::{SoapId, SoapName};
pub use options::{Engraving, OptionPrices, PackageType, Shape};
pub use price::Price;
pub use quantity::QuantityRange;
